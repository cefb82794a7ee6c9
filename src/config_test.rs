use super::*;

#[test]
fn default_names_match_nav_markup() {
    let config = MenuConfig::default();
    assert_eq!(config.panel_class, "menu");
    assert_eq!(config.panel_id, "navMenu");
    assert_eq!(config.trigger_class, "hamburger");
    assert_eq!(config.open_icon_class, "menuIcon");
    assert_eq!(config.close_icon_class, "closeIcon");
    assert_eq!(config.item_class, "menuItem");
    assert_eq!(config.shown_class, "showMenu");
}

#[test]
fn default_close_delay_is_100ms() {
    assert_eq!(MenuConfig::default().close_delay_ms, 100);
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let config: MenuConfig = serde_json::from_str(r#"{"trigger_class":"burger","close_delay_ms":250}"#)
        .expect("config should parse");
    assert_eq!(config.trigger_class, "burger");
    assert_eq!(config.close_delay_ms, 250);
    assert_eq!(config.panel_class, DEFAULT_PANEL_CLASS);
    assert_eq!(config.shown_class, DEFAULT_SHOWN_CLASS);
}

#[test]
fn deserialize_accepts_empty_object() {
    let config: MenuConfig = serde_json::from_str("{}").expect("config should parse");
    assert_eq!(config, MenuConfig::default());
}

#[test]
fn validate_rejects_blank_name() {
    let config = MenuConfig { item_class: "  ".to_owned(), ..MenuConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::EmptyName { field: "item_class" }));
}

#[test]
fn validate_reports_first_blank_field() {
    let config = MenuConfig { panel_id: String::new(), shown_class: String::new(), ..MenuConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::EmptyName { field: "panel_id" }));
}

#[test]
fn validate_accepts_defaults() {
    assert!(MenuConfig::default().validate().is_ok());
}
