/// Creates a [`Duration`](crate::time::Duration) from a literal, the range of
/// every field is checked at compile time.
///
/// ```
/// use time_utils::duration;
///
/// assert_eq!(duration!(5 - 03:07:09:0042).to_string(), "5-03:07:09:0042");
/// assert_eq!(duration!(03:07:09).to_string(), "0-03:07:09:0000");
/// ```
#[macro_export]
macro_rules! duration {
    ( $days:literal - $hours:literal : $mins:literal : $secs:literal : $millis:literal ) => {{
        $crate::static_assertions::const_assert!($days <= u32::MAX as u64);
        $crate::static_assertions::const_assert!($hours < 24);
        $crate::static_assertions::const_assert!($mins < 60);
        $crate::static_assertions::const_assert!($secs < 60);
        $crate::static_assertions::const_assert!($millis < 1000);

        const _DURATION: $crate::time::Duration = match $crate::time::Duration::new_checked(
            $days as u32,
            $hours as u8,
            $mins as u8,
            $secs as u8,
            $millis as u16,
        ) {
            Ok(duration) => duration,
            Err(_) => ::core::panic!("duration literal is out of range"),
        };

        _DURATION
    }};
    ( $hours:literal : $mins:literal : $secs:literal ) => {
        $crate::duration!(0 - $hours : $mins : $secs : 0)
    };
}
