use baconpath::format_number;

#[test]
fn test_format_number_basic() {
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1234), "1,234");
    assert_eq!(format_number(12345), "12,345");
}

#[test]
fn test_format_number_large() {
    assert_eq!(format_number(123456), "123,456");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_number_edge_cases() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(12), "12");
    assert_eq!(format_number(1000), "1,000");
}

#[test]
fn test_format_number_actor_counts() {
    // Sizes in the range of a full cast file's actor and edge counts.
    assert_eq!(format_number(170_219), "170,219");
    assert_eq!(format_number(21_537_094), "21,537,094");
    assert_eq!(format_number(u32::MAX as usize), "4,294,967,295");
}
