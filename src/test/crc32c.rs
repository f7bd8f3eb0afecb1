use crate::crc32c::crc32c;

#[test]
fn matches_the_ietf_reference_vector() {
    assert_eq!(crc32c(b"123456789"), 0xE306_9283);
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(crc32c(b""), 0);
}
