// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config};
use iced_gallery::application::browser::{Browser, BrowserOptions, Command, ModalKey, Notice};
use iced_gallery::application::port::BrowserHooks;
use iced_gallery::application::query::{CategoryFilter, Direction, SortKey};
use iced_gallery::application::view_mode::ViewMode;
use iced_gallery::domain::catalog::{Catalog, Item, ItemId};
use iced_gallery::error::{CatalogError, Error};
use iced_gallery::i18n::I18n;
use iced_gallery::infrastructure::catalog_file;
use iced_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("1", "Red Hammer", "tools")
            .with_tags(["sale"])
            .with_date("2024-01-01")
            .with_price("12 €"),
        Item::new("2", "Blue Saw", "tools").with_date("2024-02-01"),
        Item::new("3", "Green Mug", "kitchen")
            .with_tags(["sale"])
            .with_date("2024-03-01"),
    ])
    .expect("valid catalog")
}

fn visible_ids(browser: &Browser) -> Vec<&str> {
    browser
        .visible()
        .into_iter()
        .map(|item| item.id.as_str())
        .collect()
}

fn selected(browser: &Browser) -> Option<&str> {
    browser.navigator().selected().map(ItemId::as_str)
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl BrowserHooks for Recorder {
    fn on_item_click(&mut self, item: &Item) {
        self.events.push(format!("click:{}", item.id));
    }

    fn on_like(&mut self, item: &Item, liked: bool) {
        self.events.push(format!("like:{}:{liked}", item.id));
    }

    fn on_share(&mut self, item: &Item) {
        self.events.push(format!("share:{}", item.id));
    }

    fn on_download(&mut self, item: &Item) {
        self.events.push(format!("download:{}", item.id));
    }

    fn on_order(&mut self, item: &Item) {
        self.events.push(format!("order:{}", item.id));
    }
}

#[test]
fn test_scenario_search_category_and_sort() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    assert_eq!(visible_ids(&browser), vec!["3", "2", "1"]);

    browser.dispatch(Command::SetSearch("sale".into()));
    assert_eq!(visible_ids(&browser), vec!["3", "1"]);

    browser.dispatch(Command::SetSearch(String::new()));
    browser
        .select_category_named("kitchen")
        .expect("known category");
    assert_eq!(visible_ids(&browser), vec!["3"]);

    browser.dispatch(Command::SelectCategory(CategoryFilter::All));
    browser.dispatch(Command::SetSort(SortKey::Title));
    assert_eq!(visible_ids(&browser), vec!["2", "3", "1"]);
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    let result = browser.select_category_named("garden");
    assert!(matches!(result, Err(Error::InvalidSelection(_))));
    assert_eq!(browser.summary().visible, 3);
}

#[test]
fn test_category_options_start_with_all() {
    let browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    assert_eq!(browser.category_options(), vec!["all", "tools", "kitchen"]);
}

#[test]
fn test_navigator_wraps_around() {
    let catalog = Catalog::new(vec![
        Item::new("A", "A", "x"),
        Item::new("B", "B", "x"),
        Item::new("C", "C", "x"),
    ])
    .unwrap();
    let mut browser = Browser::new(
        catalog,
        BrowserOptions {
            sort: SortKey::Title,
            ..BrowserOptions::default()
        },
    );

    browser.dispatch(Command::Open(ItemId::new("A")));
    for _ in 0..3 {
        browser.dispatch(Command::Step(Direction::Next));
    }
    assert_eq!(selected(&browser), Some("A"));

    browser.dispatch(Command::Step(Direction::Previous));
    assert_eq!(selected(&browser), Some("C"));
}

#[test]
fn test_single_visible_item_does_not_move() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    browser.dispatch(Command::SetSearch("mug".into()));
    browser.dispatch(Command::Open(ItemId::new("3")));

    assert_eq!(browser.dispatch(Command::Key(ModalKey::ArrowRight)), None);
    assert_eq!(browser.dispatch(Command::Key(ModalKey::ArrowLeft)), None);
    assert_eq!(selected(&browser), Some("3"));
    assert!(!browser.navigation_info().can_step);
}

#[test]
fn test_keys_only_act_while_open() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    assert_eq!(browser.dispatch(Command::Key(ModalKey::Escape)), None);
    assert_eq!(browser.dispatch(Command::Key(ModalKey::ArrowRight)), None);
    assert!(!browser.navigator().is_open());

    browser.dispatch(Command::Open(ItemId::new("2")));
    assert_eq!(
        browser.dispatch(Command::Key(ModalKey::Escape)),
        Some(Notice::ViewerClosed)
    );
    assert!(!browser.navigator().is_open());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    let id = ItemId::new("2");
    let before = visible_ids(&browser).join(",");

    browser.dispatch(Command::ToggleLike(id.clone()));
    assert!(browser.is_liked(&id));
    browser.dispatch(Command::ToggleLike(id.clone()));
    assert!(!browser.is_liked(&id));

    assert_eq!(visible_ids(&browser).join(","), before);
}

#[test]
fn test_view_mode_leaves_other_state_alone() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    browser.dispatch(Command::SetSearch("sale".into()));
    browser.dispatch(Command::Open(ItemId::new("1")));
    browser.dispatch(Command::ToggleLike(ItemId::new("1")));

    browser.dispatch(Command::SetViewMode(ViewMode::List));

    assert_eq!(browser.view_mode(), ViewMode::List);
    assert_eq!(visible_ids(&browser), vec!["3", "1"]);
    assert_eq!(selected(&browser), Some("1"));
    assert!(browser.is_liked(&ItemId::new("1")));
}

#[test]
fn test_hooks_receive_notifications() {
    let mut browser = Browser::new(scenario_catalog(), BrowserOptions::default());
    let mut hooks = Recorder::default();

    browser.dispatch_with(Command::Open(ItemId::new("1")), &mut hooks);
    browser.dispatch_with(Command::ToggleLike(ItemId::new("1")), &mut hooks);
    browser.dispatch_with(Command::Share(ItemId::new("1")), &mut hooks);
    browser.dispatch_with(Command::Download(ItemId::new("2")), &mut hooks);
    browser.dispatch_with(Command::Order(ItemId::new("1")), &mut hooks);
    // No price, no order.
    browser.dispatch_with(Command::Order(ItemId::new("2")), &mut hooks);

    assert_eq!(
        hooks.events,
        vec![
            "click:1",
            "like:1:true",
            "share:1",
            "download:2",
            "order:1",
        ]
    );
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("fr".to_string());
    initial.general.theme_mode = ThemeMode::Dark;
    initial.browser.default_sort = SortKey::Title;
    initial.browser.default_view_mode = ViewMode::List;
    initial.browser.show_search = false;
    initial.browser.title = Some("Shop".to_string());

    config::save_to_path(&initial, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, initial);

    let options = loaded.browser.browser_options();
    assert_eq!(options.sort, SortKey::Title);
    assert_eq!(options.view_mode, ViewMode::List);
    assert!(!options.show_search);

    let browser = Browser::new(scenario_catalog(), options);
    assert_eq!(visible_ids(&browser), vec!["2", "3", "1"]);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("empty-title"), "Aucun élément trouvé");
}

#[test]
fn test_catalog_file_loads_and_resolves_images() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[items]]
id = 1
title = "Red Hammer"
category = "tools"
imageUrl = "images/hammer.jpg"
tags = ["sale"]
date = "2024-01-01"
price = "12 €"

[[items]]
id = "2"
title = "Blue Saw"
category = "tools"
image_url = "https://example.com/saw.jpg"
"#,
    )
    .expect("Failed to write catalog");

    let catalog = catalog_file::load_from_path(&path).expect("Failed to load catalog");
    assert_eq!(catalog.len(), 2);

    let hammer = catalog.get(&ItemId::new("1")).expect("item 1");
    assert_eq!(
        std::path::Path::new(&hammer.image_url),
        dir.path().join("images/hammer.jpg")
    );
    assert!(hammer.is_orderable());

    let saw = catalog.get(&ItemId::new("2")).expect("item 2");
    assert_eq!(saw.image_url, "https://example.com/saw.jpg");
}

#[test]
fn test_catalog_file_rejects_duplicate_ids() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[items]]
id = "7"
title = "One"
category = "x"

[[items]]
id = "7"
title = "Two"
category = "x"
"#,
    )
    .expect("Failed to write catalog");

    let result = catalog_file::load_from_path(&path);
    assert_eq!(
        result.unwrap_err(),
        Error::Catalog(CatalogError::DuplicateId("7".into()))
    );
}

#[tokio::test]
async fn test_async_catalog_load_reports_missing_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = catalog_file::load(dir.path().join("missing.toml")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_demo_catalog_parses() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.toml");
    let catalog = catalog_file::load(path).await.expect("demo catalog");
    assert!(!catalog.is_empty());

    let browser = Browser::new(catalog, BrowserOptions::default());
    assert_eq!(browser.category_options()[0], "all");
}
