pub fn floor() -> i8 {
    ::faultline::fault_int!(-128)
}

pub fn earliest() -> i64 {
    ::faultline::fault_int!(-9223372036854775808)
}

pub fn step_back(offset: i32) -> i32 {
    offset - ::faultline::fault_int!(1) + ::faultline::fault_int!(-2)
}

pub fn distance(delta: i32) -> i32 {
    (-5i32).abs() + delta
}
