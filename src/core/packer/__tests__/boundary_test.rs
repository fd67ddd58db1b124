use crate::core::packer::{
    from_tuple4x4, try_from_columns, try_from_slice2, try_from_slice3, try_from_slice4,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn 올바른_슬라이스_변환_테스트() {
    assert_eq!(try_from_slice2(&[1.0f64, 2.0]).unwrap().as_slice(), &[1.0, 2.0]);
    assert_eq!(try_from_slice3(&[1i32, 2, 3]).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(
        try_from_slice4(&[0.5f32, 1.5, 2.5, 3.5]).unwrap().as_slice(),
        &[0.5, 1.5, 2.5, 3.5]
    );
}

#[test]
fn 잘못된_arity_거부_테스트() {
    init_logger();

    let err = try_from_slice2(&[1.0f64]).unwrap_err();
    assert!(err.to_string().contains("tuple2"));
    assert!(err.to_string().contains("2개"));

    assert!(try_from_slice3(&[1.0f64, 2.0, 3.0, 4.0]).is_err());
    assert!(try_from_slice4::<f64>(&[]).is_err());
}

#[test]
fn 열_슬라이스_행렬_변환_테스트() {
    let c0 = [1.0f64, 2.0, 3.0, 4.0];
    let c1 = [5.0f64, 6.0, 7.0, 8.0];
    let c2 = [9.0f64, 10.0, 11.0, 12.0];
    let c3 = [13.0f64, 14.0, 15.0, 16.0];

    let buffer = try_from_columns(&[&c0[..], &c1[..], &c2[..], &c3[..]]).unwrap();
    let typed = from_tuple4x4((
        (1.0, 2.0, 3.0, 4.0),
        (5.0, 6.0, 7.0, 8.0),
        (9.0, 10.0, 11.0, 12.0),
        (13.0f64, 14.0, 15.0, 16.0),
    ));
    assert!(buffer.bit_eq(&typed));
}

#[test]
fn 잘못된_열_형상_거부_테스트() {
    init_logger();

    let full = [0.0f64; 4];
    let short = [0.0f64; 3];

    // 열 개수 부족
    assert!(try_from_columns(&[&full[..], &full[..], &full[..]]).is_err());

    // 세 번째 열 길이 부족
    let err = try_from_columns(&[&full[..], &full[..], &short[..], &full[..]]).unwrap_err();
    assert!(err.to_string().contains("column 2"), "에러 메시지: {}", err);
}
