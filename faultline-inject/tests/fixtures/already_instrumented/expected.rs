pub struct Window {
    slots: Vec<u32>,
}

impl Window {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(::faultline::fault_int!(16)),
        }
    }

    pub fn push(&mut self, value: u32) {
        if self.slots.len() >= ::faultline::fault_int!(16) {
            self.slots.remove(::faultline::fault_int!(0));
        }
        self.slots.push(value + ::faultline::fault_int!(1));
    }

    pub fn last_offset(&self) -> Option<usize> {
        self.slots.len().checked_sub(::faultline::fault_int!(1))
    }
}

pub fn backoff(attempt: u32) -> u64 {
    let base = ::faultline::fault_int!(100);
    base * 2u64.pow(attempt.min(::faultline::fault_int!(6)))
}
