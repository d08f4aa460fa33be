const LIMIT: usize = 8;
static RETRIES: u32 = 3;

#[repr(u8)]
pub enum Op {
    Read = 1,
    Write = 2,
}

pub const fn mask() -> u32 {
    0xff
}

pub fn fill(buf: &mut [u8; 4], kind: Op) -> [u8; 4] {
    let copy: [u8; 4] = [7; 4];
    match kind {
        Op::Read => buf[0] = 1,
        Op::Write => buf[3] = 2,
    }
    match buf[1] {
        0..=9 => copy,
        _ => [0; LIMIT / 2],
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn limit_is_eight() {
        assert_eq!(super::LIMIT, 8);
    }
}
