// tests/cli_recommend.rs - End-to-end runs of the larder binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const RECIPES: &str = ",Title,Ingredients,Instructions,Image_Name,Cleaned_Ingredients
0,Soup,\"['2 potatoes', '1 onion, diced']\",Boil everything.,soup,x
1,Salad,\"['1 potato', '1 head lettuce']\",Toss.,salad,x
";

fn fixture() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    let data = d.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("recipes.csv"), RECIPES).unwrap();
    fs::write(data.join("ingredients.csv"), "name\npotato\nonion\nlettuce\negg\n").unwrap();
    fs::write(
        data.join("ingredient_prices.csv"),
        "name,price\npotato,1.0\nonion,1.5\nlettuce,2.0\negg,0.5\n",
    )
    .unwrap();
    fs::write(d.path().join("larder.toml"), "[display]\npage_size = 5\n").unwrap();
    d
}

fn larder(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_larder"))
        .current_dir(dir)
        .arg("--config")
        .arg(dir.join("larder.toml"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_recommend_lists_matches() {
    let d = fixture();
    let out = larder(d.path(), &["recommend", "-i", "potato"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    let soup = text.find("Soup").unwrap();
    let salad = text.find("Salad").unwrap();
    assert!(soup < salad, "ties keep catalog order:\n{text}");
}

#[test]
fn test_recommend_unknown_ingredient_is_invalid_input() {
    let d = fixture();
    let out = larder(d.path(), &["recommend", "-i", "dragonfruit"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_recommend_without_matches() {
    let d = fixture();
    let out = larder(d.path(), &["recommend", "-i", "egg"]);
    assert_eq!(out.status.code(), Some(3));

    let out = larder(d.path(), &["recommend", "-i", "potato", "--max-price", "1"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn test_recommend_page_out_of_range_is_invalid_input() {
    let d = fixture();
    let out = larder(d.path(), &["recommend", "-i", "potato", "--page", "1"]);
    assert_eq!(out.status.code(), Some(0));

    let out = larder(d.path(), &["recommend", "-i", "potato", "--page", "2"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));
}

#[test]
fn test_rate_then_filter_by_rating() {
    let d = fixture();
    let out = larder(d.path(), &["rate", "Salad", "--rating", "5", "--comment", "crisp, fresh"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(d.path().join("data/reviews.csv").exists());

    let out = larder(d.path(), &["recommend", "-i", "potato", "--min-rating", "4"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Salad"));
    assert!(!text.contains("Soup"), "unrated recipes are dropped:\n{text}");
}

#[test]
fn test_rate_unknown_recipe() {
    let d = fixture();
    let out = larder(d.path(), &["rate", "Stew", "--rating", "3"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!d.path().join("data/reviews.csv").exists());
}

#[test]
fn test_show_and_pairings() {
    let d = fixture();
    let out = larder(d.path(), &["show", "Soup"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Boil everything."));

    let out = larder(d.path(), &["pairings", "potato"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("onion"));
    assert!(text.contains("lettuce"));
}

#[test]
fn test_export_writes_graph_json() {
    let d = fixture();
    let out = larder(d.path(), &["export", "-i", "lettuce"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let mut keys: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["key"].as_str())
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["Salad", "lettuce", "potato"]);
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_catalog_is_error() {
    let d = fixture();
    fs::remove_file(d.path().join("data/recipes.csv")).unwrap();
    let out = larder(d.path(), &["common"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("recipes.csv"));
}
