//! Issues increasing sequence numbers to actions as they are fired.
#[derive(Default, Debug, Clone)]
pub struct RequestSeq {
    pub issued: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }
}
