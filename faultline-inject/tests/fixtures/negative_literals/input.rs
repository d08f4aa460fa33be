pub fn floor() -> i8 {
    -128
}

pub fn earliest() -> i64 {
    -9223372036854775808
}

pub fn step_back(offset: i32) -> i32 {
    offset - 1 + -2
}

pub fn distance(delta: i32) -> i32 {
    (-5i32).abs() + delta
}
