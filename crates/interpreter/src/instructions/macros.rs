//! Utility macros to help implementing opcode instruction functions.

/// Records a gas cost and fails the instruction when it exceeds the
/// remaining gas. A frame that runs out of gas forfeits what is left.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! gas {
    ($frame:expr, $cost:expr) => {
        if !$frame.gas.record_cost($cost) {
            $frame.halt_insufficient_gas();
            return;
        }
    };
}

/// Like [`gas!`], for dynamically computed costs that can overflow to
/// `None`.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! gas_or_fail {
    ($frame:expr, $cost:expr) => {
        match $cost {
            Some(cost) => $crate::gas!($frame, cost),
            None => {
                $frame.halt_insufficient_gas();
                return;
            }
        }
    };
}

/// Pops n values from the stack. Fails the instruction if n values can't
/// be popped.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! popn {
    ([ $($x:ident),* ], $frame:expr) => {
        let Ok([$( $x ),*]) = $frame.stack.popn() else {
            $frame.halt($crate::HaltReason::StackUnderflow);
            return;
        };
    };
}

/// Pops n values from the stack and returns a mutable reference to the new
/// top. Fails the instruction if the stack is too shallow.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! popn_top {
    ([ $($x:ident),* ], $top:ident, $frame:expr) => {
        let Ok(([$( $x ),*], $top)) = $frame.stack.popn_top() else {
            $frame.halt($crate::HaltReason::StackUnderflow);
            return;
        };
    };
}

/// Pushes a word onto the stack. Fails the instruction if the stack is
/// full.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! push {
    ($frame:expr, $value:expr) => {
        if let Err(err) = $frame.stack.push($value) {
            $frame.halt_stack(err);
            return;
        }
    };
}

/// Fails the instruction with an invalid-operation halt when the current
/// code is not an EOF container.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! require_eof {
    ($frame:expr) => {
        if !$frame.code.is_eof() {
            $frame.halt($crate::HaltReason::InvalidOperation);
            return;
        }
    };
}

/// Converts a [`Word256`](primitives::Word256) to a `u64`, saturating to
/// `MAX` if the value is too large.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! as_u64_saturated {
    ($v:expr) => {
        match $v.as_limbs() {
            x => {
                if (x[1] == 0) & (x[2] == 0) & (x[3] == 0) {
                    x[0]
                } else {
                    u64::MAX
                }
            }
        }
    };
}

/// Converts a [`Word256`](primitives::Word256) to a `usize`, saturating to
/// `MAX` if the value is too large.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! as_usize_saturated {
    ($v:expr) => {
        usize::try_from($crate::as_u64_saturated!($v)).unwrap_or(usize::MAX)
    };
}
