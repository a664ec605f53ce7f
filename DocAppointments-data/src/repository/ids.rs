use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

/// Tag for appointment ids
pub const APPOINTMENT_TAG: &str = "apt";

/// Tag for prescription ids
pub const PRESCRIPTION_TAG: &str = "pres";

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Generate an id of the form `{tag}_{millis in base36}_{random suffix}`
pub fn generate_id(tag: &str) -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}_{}_{}", tag, to_base36(millis), suffix)
}

/// Generate an id, re-rolling while `taken` reports a collision
pub fn generate_unique_id(tag: &str, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id(tag);
        if !taken(&id) {
            return id;
        }
    }
}
