use rand::Rng;

/// Six decimal digits, uniform in [100000, 999999].
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_six_digits_in_range() {
        for _ in 0..1000 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            let n: u32 = otp.parse().expect("numeric");
            assert!((100_000..=999_999).contains(&n));
        }
    }
}
