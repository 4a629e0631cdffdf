//! Rational Facades

use entities_numerics::Rational;
use infrastructure_record_encoding::{BigIntRecord, RationalRecord};

use crate::common_facades::{read_big_int, read_rational, store_rational};

/// Store `numerator / denominator` in lowest terms into `ra`
///
/// # Safety
/// Inputs must be null or valid records; `ra` must be null or an
/// initialized record.
#[no_mangle]
pub unsafe extern "C" fn set_rational(
    ra: *mut RationalRecord,
    numerator: *const BigIntRecord,
    denominator: *const BigIntRecord,
) {
    let value = Rational::new(
        read_big_int(numerator, "set_rational"),
        read_big_int(denominator, "set_rational"),
    );
    store_rational(&value, ra, "set_rational");
}

macro_rules! rational_op_facade {
    ($name:ident, $op:tt) => {
        /// # Safety
        /// Inputs must be null or valid records; `out` must be null or an
        /// initialized record.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            left: *const RationalRecord,
            right: *const RationalRecord,
            out: *mut RationalRecord,
        ) {
            let mut value = read_rational(left, stringify!($name));
            value $op read_rational(right, stringify!($name));
            store_rational(&value, out, stringify!($name));
        }
    };
}

rational_op_facade!(add_rational, +=);
rational_op_facade!(sub_rational, -=);
rational_op_facade!(mul_rational, *=);
rational_op_facade!(div_rational, /=);
