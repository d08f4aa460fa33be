pub fn summarize(values: &[i64]) -> String {
    let total: i64 = values.iter().map(|v| v * ::faultline::fault_int!(3)).sum();
    let large = values.iter().filter(|&&v| v > ::faultline::fault_int!(10)).count();
    println!("{} {}", total, 5);
    format!("{}-{}", total, large + 1)
}
