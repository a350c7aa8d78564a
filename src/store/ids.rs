use std::time::{SystemTime, UNIX_EPOCH};

pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Issues `custom-<unix millis>` ids that never repeat within a process and
/// skip anything already taken.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: u128,
}

impl IdGenerator {
    pub(crate) fn next(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        let mut stamp = now.max(self.last + 1);

        loop {
            let id = format!("{CUSTOM_ID_PREFIX}{stamp}");
            if !is_taken(&id) {
                self.last = stamp;
                return id;
            }
            stamp += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_prefixed_and_distinct() {
        let mut ids = IdGenerator::default();
        let first = ids.next(|_| false);
        let second = ids.next(|_| false);

        assert!(first.starts_with(CUSTOM_ID_PREFIX));
        assert_ne!(first, second);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdGenerator::default();
        let stamps: Vec<u128> = (0..100)
            .map(|_| ids.next(|_| false)[CUSTOM_ID_PREFIX.len()..].parse().unwrap())
            .collect();

        assert!(stamps.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_taken_ids_are_skipped() {
        let mut ids = IdGenerator::default();
        let probe = ids.next(|_| false);
        let next_stamp: u128 = probe[CUSTOM_ID_PREFIX.len()..].parse::<u128>().unwrap() + 1;
        let blocked = format!("{CUSTOM_ID_PREFIX}{next_stamp}");

        let id = ids.next(|id| id == blocked);
        assert_ne!(id, blocked);
        assert_ne!(id, probe);
    }
}
