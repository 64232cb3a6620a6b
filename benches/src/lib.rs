//! Shared setup for the Turing benchmarks.
//!
//! Cycle counting is only available where `criterion-cycles-per-byte` can
//! read a cycle counter; elsewhere wall-clock time is measured.
use cfg_if::cfg_if;
use criterion::Criterion;

cfg_if! {
    if #[cfg(any(
        target_arch = "x86_64",
        target_arch = "x86",
        all(target_arch = "aarch64", target_os = "linux")
    ))] {
        use criterion_cycles_per_byte::CyclesPerByte;

        pub type Benchmarker = Criterion<CyclesPerByte>;

        /// Criterion configured to report cycles per byte.
        pub fn config() -> Benchmarker {
            Criterion::default().with_measurement(CyclesPerByte)
        }
    } else {
        pub type Benchmarker = Criterion;

        /// Criterion with its default wall-clock measurement.
        pub fn config() -> Benchmarker {
            Criterion::default()
        }
    }
}

/// Declare a criterion group `$name` running `$target` under [`config`].
#[macro_export]
macro_rules! criterion_group_bench {
    ($name:ident, $target:ident) => {
        criterion::criterion_group!(
            name = $name;
            config = $crate::config();
            targets = $target
        );
    };
}
