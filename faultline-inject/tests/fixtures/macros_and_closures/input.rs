pub fn summarize(values: &[i64]) -> String {
    let total: i64 = values.iter().map(|v| v * 3).sum();
    let large = values.iter().filter(|&&v| v > 10).count();
    println!("{} {}", total, 5);
    format!("{}-{}", total, large + 1)
}
