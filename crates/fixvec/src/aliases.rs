use fixvec_macros::vector_aliases;

// `l` is the 32-bit "long" of the original family.
vector_aliases!(2..=10;
    b: bool,
    f: f32,
    d: f64,
    l: i32,
    i8: i8,
    i16: i16,
    i32: i32,
    i64: i64,
    u8: u8,
    u16: u16,
    u32: u32,
    u64: u64,
);
