use crate::block::{double, one_zero_pad, xor16, Block, BLOCK_SIZE, ZERO};

#[test]
fn one_zero_pad_marks_the_boundary_and_zeros_the_rest() {
    for n in 0..BLOCK_SIZE {
        let src: Vec<u8> = (0..n as u8).map(|b| b + 1).collect();
        let padded = one_zero_pad(&src, n);
        assert_eq!(&padded[..n], &src[..], "first {n} bytes must be copied verbatim");
        assert_eq!(padded[n], 0x80, "byte at position {n} must be the pad marker");
        assert!(
            padded[n + 1..].iter().all(|&b| b == 0),
            "bytes after position {n} must be zero"
        );
    }
}

#[test]
fn double_of_zero_is_zero() {
    let mut p = ZERO;
    double(&mut p);
    assert_eq!(p, ZERO);
}

#[test]
fn double_is_linear() {
    let a: Block = [0x5A; BLOCK_SIZE];
    let b: Block = [0xA3; BLOCK_SIZE];

    let mut sum = xor16(&a, &b);
    double(&mut sum);

    let mut da = a;
    double(&mut da);
    let mut db = b;
    double(&mut db);
    let doubled_sum = xor16(&da, &db);

    assert_eq!(sum, doubled_sum);
}
