use baconpath::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    assert!(colors.actor_name("Kevin Bacon").to_string().contains("Kevin Bacon"));
    assert!(colors.success("Success").to_string().contains("Success"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.step_number("1.").to_string().contains("1."));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
    assert!(colors.prompt("Enter").to_string().contains("Enter"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    assert_eq!(colors.actor_name("Kevin Bacon").to_string(), "Kevin Bacon");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.error("Error").to_string(), "Error");
    assert_eq!(colors.prompt("Enter").to_string(), "Enter");
}
