use std::io::Write;

use daily_combos_rs::menu::{load_menu, load_menu_from_path, load_menu_with_report, SkipReason};
use daily_combos_rs::models::{Category, MenuItem};
use tempfile::NamedTempFile;

const HEADER: &str = "category,item_name,calories,popularity_score\n";

fn names(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_category_mapping_is_case_and_whitespace_insensitive() {
    let csv = format!(
        "{HEADER}\
         MAIN,Burger,550,8.2\n\
         \tMain ,Pasta,700,7.9\n\
         side,Fries,300,7.5\n\
         Side,Salad,120,6.1\n\
         DRINK,Cola,150,9.0\n\
         dessert,Cake,400,9.9\n\
         dish,Steak,800,8.8\n"
    );

    let menu = load_menu(csv.as_bytes()).unwrap();

    assert_eq!(names(menu.items(Category::Dish)), vec!["Burger", "Pasta"]);
    assert_eq!(names(menu.items(Category::SideDish)), vec!["Fries", "Salad"]);
    assert_eq!(names(menu.items(Category::Drink)), vec!["Cola"]);
    assert_eq!(menu.len(), 5, "unknown categories must not produce items");
}

#[test]
fn test_bad_rows_are_skipped_without_error() {
    let csv = format!(
        "{HEADER}\
         main,Burger,lots,8.2\n\
         main,Pasta,700,popular\n\
         main,Wrap,,5.0\n\
         main,Taco\n\
         main,Soup,250.9,6.0\n"
    );

    let (menu, report) = load_menu_with_report(csv.as_bytes()).unwrap();

    assert_eq!(menu.items(Category::Dish), &[MenuItem::new("Soup", 250, 6.0)]);
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped_count(), 4);

    let reasons: Vec<&SkipReason> = report.skipped.iter().map(|r| &r.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &SkipReason::InvalidCalories("lots".to_string()),
            &SkipReason::InvalidPopularity("popular".to_string()),
            &SkipReason::InvalidCalories(String::new()),
            &SkipReason::MissingField("calories"),
        ]
    );
    let lines: Vec<u64> = report.skipped.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5]);
}

#[test]
fn test_column_order_and_extra_columns() {
    let csv = "popularity_score,notes,item_name,category,calories\n\
               8.2,house special,Burger,main,550\n\
               7.5,,Fries,side,300\n";

    let menu = load_menu(csv.as_bytes()).unwrap();

    assert_eq!(menu.items(Category::Dish), &[MenuItem::new("Burger", 550, 8.2)]);
    assert_eq!(menu.items(Category::SideDish), &[MenuItem::new("Fries", 300, 7.5)]);
}

#[test]
fn test_header_names_are_case_sensitive() {
    let csv = "Category,Item_Name,Calories,Popularity_Score\nmain,Burger,550,8.2\n";

    let (menu, report) = load_menu_with_report(csv.as_bytes()).unwrap();

    assert!(menu.is_empty());
    assert_eq!(
        report.skipped[0].reason,
        SkipReason::MissingField("category")
    );
}

#[test]
fn test_calories_truncate_toward_zero() {
    let csv = format!("{HEADER}main,Burger,550.99,8.2\ndrink,Water,-0.5,1.0\n");

    let menu = load_menu(csv.as_bytes()).unwrap();

    assert_eq!(menu.items(Category::Dish)[0].calories, 550);
    assert_eq!(menu.items(Category::Drink)[0].calories, 0);
}

#[test]
fn test_names_are_trimmed() {
    let csv = format!("{HEADER}side,  Onion Rings  ,410,7.0\n");

    let menu = load_menu(csv.as_bytes()).unwrap();

    assert_eq!(menu.items(Category::SideDish)[0].name, "Onion Rings");
}

#[test]
fn test_empty_input_yields_empty_menu() {
    let menu = load_menu("".as_bytes()).unwrap();
    assert!(menu.is_empty());

    let menu = load_menu(HEADER.as_bytes()).unwrap();
    assert!(menu.is_empty());
    assert_eq!(menu.missing_categories().len(), 3);
}

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{HEADER}main,Burger,550,8.2\nside,Fries,300,7.5\ndrink,Cola,150,9.0\n"
    )
    .unwrap();

    let (menu, report) = load_menu_from_path(file.path()).unwrap();

    assert!(menu.is_complete());
    assert_eq!(report.loaded, 3);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_menu_from_path(dir.path().join("absent.csv")).is_err());
}
