use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` correctly computes the sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    cvlr_assume!(x.checked_add(y).is_some());
    let result = add(x, y);
    cvlr_assert_eq!(result, x + y);
}

/// Operand order does not change the sum.
#[rule]
pub fn rule_add_is_commutative() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    cvlr_assume!(x.checked_add(y).is_some());
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x: i64 = nondet();
    cvlr_assert_eq!(add(x, 0), x);
}
