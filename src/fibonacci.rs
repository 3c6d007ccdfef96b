// iterative Fibonacci numbers
// Counts are unsigned, so there is no negative case to guard against.
// Results are u64 and stop fitting after F(93).

/// The Fibonacci number at position `count`, with F(0) = 0 and F(1) = 1.
pub fn fibonacci(count: u32) -> u64 {
    if count == 0 {
        return 0;
    }
    let mut first = 0;
    let mut second = 1;
    for _ in 1..count {
        let next = first + second;
        first = second;
        second = next;
    }
    second
}

/// Yields F(0), F(1), F(2), ... up to F(93), the last one that fits a u64.
/// Checks `fibonacci` against the sequence it should be sampling.
#[cfg(test)]
pub struct Fibonacci {
    current: Option<u64>,
    following: Option<u64>,
}

#[cfg(test)]
impl Fibonacci {
    pub fn new() -> Fibonacci {
        Fibonacci {
            current: Some(0),
            following: Some(1),
        }
    }
}

#[cfg(test)]
impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        self.current = self.following;
        self.following = self.following.and_then(|f| current.checked_add(f));
        Some(current)
    }
}
