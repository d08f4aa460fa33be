pub struct Window {
    slots: Vec<u32>,
}

impl Window {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, value: u32) {
        if self.slots.len() >= 16 {
            self.slots.remove(0);
        }
        self.slots.push(value + 1);
    }

    pub fn last_offset(&self) -> Option<usize> {
        self.slots.len().checked_sub(1)
    }
}

pub fn backoff(attempt: u32) -> u64 {
    let base = 100;
    base * 2u64.pow(attempt.min(6))
}
