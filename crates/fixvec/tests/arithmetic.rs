use fixvec::{Error, Op, Result, Vector, Vector2l, Vector3d, Vector3f, Vector4i8, Vector10l};

fn samples() -> Vec<Vector3d> {
    vec![
        Vector3d::new([0.0, 0.0, 0.0]),
        Vector3d::new([1.5, -2.25, 8.0]),
        Vector3d::new([-0.125, 1e6, 3.5]),
        Vector3d::splat(-7.0),
    ]
}

#[test]
fn test_componentwise_vector_ops() {
    let a = Vector3f::new([1.0, 2.0, 3.0]);
    let b = Vector3f::new([4.0, 5.0, 6.0]);

    assert_eq!(a + b, Vector3f::new([5.0, 7.0, 9.0]));
    assert_eq!(b - a, Vector3f::new([3.0, 3.0, 3.0]));
    assert_eq!(a * b, Vector3f::new([4.0, 10.0, 18.0]));
    assert_eq!(b / a, Vector3f::new([4.0, 2.5, 2.0]));
}

#[test]
fn test_scalar_broadcast_ops() {
    let a = Vector2l::new([6, -9]);

    assert_eq!(a + 3, Vector2l::new([9, -6]));
    assert_eq!(a - 3, Vector2l::new([3, -12]));
    assert_eq!(a * 3, Vector2l::new([18, -27]));
    assert_eq!(a / 3, Vector2l::new([2, -3]));
}

#[test]
fn test_scalar_broadcast_matches_splat() {
    for a in samples() {
        for s in [0.0, 1.0, -3.5, 1024.0] {
            assert_eq!(a + s, a + Vector3d::splat(s));
            assert_eq!(a - s, a - Vector3d::splat(s));
            assert_eq!(a * s, a * Vector3d::splat(s));
        }
    }
}

#[test]
fn test_zero_is_additive_identity() {
    for a in samples() {
        assert_eq!(a + Vector3d::zero(), a);
    }

    let ints = Vector10l::new([1, -2, 3, -4, 5, -6, 7, -8, 9, -10]);
    assert_eq!(ints + Vector10l::default(), ints);
}

#[test]
fn test_compound_round_trip() {
    let b = Vector3d::new([0.5, -0.25, 2.0]);
    for original in samples() {
        let mut a = original;
        a += b;
        a -= b;
        assert_eq!(a, original);
    }

    let mut ints = Vector2l::new([10, 20]);
    ints *= Vector2l::new([3, 4]);
    assert_eq!(ints, Vector2l::new([30, 80]));
    ints /= Vector2l::new([3, 4]);
    assert_eq!(ints, Vector2l::new([10, 20]));
}

#[test]
fn test_compound_round_trip_integers() {
    let step = Vector2l::new([7, -13]);
    for original in [
        Vector2l::new([0, 0]),
        Vector2l::new([-100, 250]),
        Vector2l::new([i32::MAX - 7, i32::MIN + 13]),
    ] {
        let mut a = original;
        a += step;
        a -= step;
        assert_eq!(a, original);
    }

    let step = Vector::<u8, 3>::new([1, 20, 55]);
    for original in [
        Vector::<u8, 3>::new([0, 0, 0]),
        Vector::<u8, 3>::new([9, 100, 200]),
        Vector::<u8, 3>::new([254, 235, 0]),
    ] {
        let mut a = original;
        a += step;
        a -= step;
        assert_eq!(a, original);
    }
}

#[test]
fn test_compound_ops_chain() {
    let mut v = Vector2l::new([1, 2]);
    v.add_by(1).mul_by(Vector2l::new([2, 3])).sub_by(2).div_by(2);
    assert_eq!(v, Vector2l::new([1, 3]));

    let mut f = Vector3f::splat(1.0);
    let chained = *f.add_by(Vector3f::new([0.0, 1.0, 2.0])).mul_by(0.5);
    assert_eq!(chained, Vector3f::new([0.5, 1.0, 1.5]));
    assert_eq!(f, Vector3f::new([0.5, 1.0, 1.5]));
}

#[test]
fn test_compound_scalar_ops() {
    let mut v = Vector3f::new([1.0, 2.0, 3.0]);
    v += 1.0;
    assert_eq!(v, Vector3f::new([2.0, 3.0, 4.0]));
    v *= 2.0;
    assert_eq!(v, Vector3f::new([4.0, 6.0, 8.0]));
    v -= 4.0;
    assert_eq!(v, Vector3f::new([0.0, 2.0, 4.0]));
    v /= 2.0;
    assert_eq!(v, Vector3f::new([0.0, 1.0, 2.0]));
}

#[test]
fn test_increment_decrement() {
    let mut v = Vector2l::new([1, -1]);

    assert_eq!(*v.increment(), Vector2l::new([2, 0]));
    assert_eq!(v.post_increment(), Vector2l::new([2, 0]));
    assert_eq!(v, Vector2l::new([3, 1]));

    assert_eq!(v.post_decrement(), Vector2l::new([3, 1]));
    assert_eq!(*v.decrement(), Vector2l::new([1, -1]));
    assert_eq!(*v.increment().increment(), Vector2l::new([3, 1]));

    let mut f = Vector3f::new([0.5, 1.5, 2.5]);
    f.increment();
    assert_eq!(f, Vector3f::new([1.5, 2.5, 3.5]));
}

#[test]
fn test_negation() {
    assert_eq!(-Vector2l::new([3, -4]), Vector2l::new([-3, 4]));
    assert_eq!(-Vector3f::splat(1.0), Vector3f::splat(-1.0));
}

#[test]
fn test_float_division_by_zero_is_ieee() {
    let v = Vector3f::new([1.0, -1.0, 0.0]) / 0.0;
    assert_eq!(v.x(), f32::INFINITY);
    assert_eq!(v.y(), f32::NEG_INFINITY);
    assert!(v.z().is_nan());
}

#[test]
fn test_checked_division_by_zero() -> Result<()> {
    let v = Vector2l::new([8, 9]);

    assert_eq!(
        v.checked_div(Vector2l::new([2, 0])),
        Err(Error::DivisionByZero { ty: "i32" })
    );
    assert_eq!(
        v.checked_div_scalar(0),
        Err(Error::DivisionByZero { ty: "i32" })
    );
    assert_eq!(v.checked_div_scalar(2)?, Vector2l::new([4, 4]));

    Ok(())
}

#[test]
#[should_panic]
fn test_operator_division_by_zero_panics_for_integers() {
    let _ = Vector2l::new([1, 2]) / Vector2l::new([1, 0]);
}

#[test]
fn test_checked_overflow() -> Result<()> {
    let v = Vector4i8::new([100, 0, -100, 1]);

    assert_eq!(
        v.checked_add_scalar(100),
        Err(Error::Overflow { op: Op::Add, ty: "i8" })
    );
    assert_eq!(
        v.checked_mul(Vector4i8::splat(2)),
        Err(Error::Overflow { op: Op::Mul, ty: "i8" })
    );
    assert_eq!(v.checked_sub_scalar(27)?, Vector4i8::new([73, -27, -127, -26]));
    assert_eq!(
        v.checked_add(Vector4i8::new([1, 2, 3, 4]))?,
        Vector4i8::new([101, 2, -97, 5])
    );

    Ok(())
}

#[test]
fn test_checked_increment_leaves_vector_on_failure() -> Result<()> {
    let mut v = Vector::<u8, 3>::new([0, 254, 255]);
    assert_eq!(
        v.checked_increment().map(|v| *v),
        Err(Error::Overflow { op: Op::Increment, ty: "u8" })
    );
    assert_eq!(v, Vector::new([0, 254, 255]));

    let mut w = Vector::<u8, 3>::new([1, 2, 3]);
    w.checked_increment()?.checked_increment()?;
    assert_eq!(w, Vector::new([3, 4, 5]));
    w.checked_decrement()?;
    assert_eq!(w, Vector::new([2, 3, 4]));

    Ok(())
}

#[test]
fn test_map_and_zip_with() {
    let v = Vector2l::new([2, 3]);
    let squared = v.map(|c| c * c);
    assert_eq!(squared, Vector2l::new([4, 9]));

    let as_float = v.map(|c| c as f64);
    assert_eq!(as_float, Vector::new([2.0, 3.0]));

    assert_eq!(v.zip_with(squared, i32::max), squared);
}
