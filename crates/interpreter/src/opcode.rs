//! Opcode descriptors and the dispatch table.

use crate::{
    frame::Frame,
    instructions::{arithmetic, bitwise, contract, control, data, stack_ops},
};
use core::fmt;

/// Opcode function signature: a pure transformer over the frame.
pub type Instruction = fn(&mut Frame);

/// A byte that names a defined opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpCode(u8);

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.get();
        if let Some(info) = OPCODE_INFO[n as usize] {
            f.write_str(info.name)
        } else {
            write!(f, "UNKNOWN(0x{n:02X})")
        }
    }
}

impl OpCode {
    /// Instantiates a new opcode from a byte, if that byte is assigned.
    #[inline]
    pub const fn new(opcode: u8) -> Option<Self> {
        match OPCODE_INFO[opcode as usize] {
            Some(_) => Some(Self(opcode)),
            None => None,
        }
    }

    /// Returns the opcode descriptor.
    #[inline]
    pub const fn info(&self) -> OpCodeInfo {
        if let Some(info) = OPCODE_INFO[self.0 as usize] {
            info
        } else {
            panic!("unreachable, all constructed opcodes are defined")
        }
    }

    /// Returns the opcode mnemonic.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.info().name
    }

    /// Returns the number of stack inputs the opcode consumes.
    #[inline]
    pub const fn inputs(&self) -> u8 {
        self.info().inputs
    }

    /// Returns the number of stack outputs the opcode produces.
    #[inline]
    pub const fn outputs(&self) -> u8 {
        self.info().outputs
    }

    /// Returns the size of the immediate that follows the opcode byte.
    #[inline]
    pub const fn immediate_size(&self) -> u8 {
        self.info().immediate_size
    }

    /// Returns the opcode as a byte.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Information about an opcode: mnemonic, stack inputs and outputs,
/// immediate size and whether it terminates the frame.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpCodeInfo {
    /// The mnemonic.
    pub name: &'static str,
    /// Stack words consumed.
    pub inputs: u8,
    /// Stack words produced.
    pub outputs: u8,
    /// Size of the immediate that follows the opcode byte.
    pub immediate_size: u8,
    /// Whether the opcode ends execution of the frame.
    pub terminating: bool,
}

impl OpCodeInfo {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            inputs: 0,
            outputs: 0,
            immediate_size: 0,
            terminating: false,
        }
    }
}

const fn stack_io<const I: u8, const O: u8>(mut opcode: OpCodeInfo) -> OpCodeInfo {
    opcode.inputs = I;
    opcode.outputs = O;
    opcode
}

const fn imm_size<const N: u8>(mut opcode: OpCodeInfo) -> OpCodeInfo {
    opcode.immediate_size = N;
    opcode
}

const fn terminating(mut opcode: OpCodeInfo) -> OpCodeInfo {
    opcode.terminating = true;
    opcode
}

macro_rules! opcodes {
    ($($val:literal => $name:ident => $f:expr => $($modifier:ident $(< $($modifier_num:literal),* >)?),*);* $(;)?) => {
        // Constants for each opcode byte.
        $(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name), "\") opcode.")]
            pub const $name: u8 = $val;
        )*
        impl OpCode {$(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name), "\") opcode.")]
            pub const $name: Self = Self($val);
        )*}

        /// Maps each opcode byte to its descriptor; unassigned bytes are
        /// `None`.
        pub const OPCODE_INFO: [Option<OpCodeInfo>; 256] = {
            let mut map = [None; 256];
            let mut prev: u8 = 0;
            $(
                let val: u8 = $val;
                assert!(val == 0 || val > prev, "opcodes must be sorted in ascending order");
                prev = val;
                let info = OpCodeInfo::new(stringify!($name));
                $( let info = $modifier$(::< $( $modifier_num ),+ >)? (info);)*
                map[$val] = Some(info);
            )*
            let _ = prev;
            map
        };

        /// Returns the instruction function for the given opcode byte.
        pub const fn instruction(opcode: u8) -> Instruction {
            match opcode {
                $($name => $f,)*
                _ => control::unknown,
            }
        }
    };
}

opcodes! {
    0x00 => STOP => control::stop => stack_io<0, 0>, terminating;

    0x01 => ADD        => arithmetic::add        => stack_io<2, 1>;
    0x02 => MUL        => arithmetic::mul        => stack_io<2, 1>;
    0x03 => SUB        => arithmetic::sub        => stack_io<2, 1>;
    0x04 => DIV        => arithmetic::div        => stack_io<2, 1>;
    0x05 => SDIV       => arithmetic::sdiv       => stack_io<2, 1>;
    0x06 => MOD        => arithmetic::rem        => stack_io<2, 1>;
    0x07 => SMOD       => arithmetic::smod       => stack_io<2, 1>;
    0x08 => ADDMOD     => arithmetic::addmod     => stack_io<3, 1>;
    0x09 => MULMOD     => arithmetic::mulmod     => stack_io<3, 1>;
    0x0A => EXP        => arithmetic::exp        => stack_io<2, 1>;
    0x0B => SIGNEXTEND => arithmetic::signextend => stack_io<2, 1>;

    0x10 => LT     => bitwise::lt     => stack_io<2, 1>;
    0x11 => GT     => bitwise::gt     => stack_io<2, 1>;
    0x12 => SLT    => bitwise::slt    => stack_io<2, 1>;
    0x13 => SGT    => bitwise::sgt    => stack_io<2, 1>;
    0x14 => EQ     => bitwise::eq     => stack_io<2, 1>;
    0x15 => ISZERO => bitwise::iszero => stack_io<1, 1>;
    0x16 => AND    => bitwise::bitand => stack_io<2, 1>;
    0x17 => OR     => bitwise::bitor  => stack_io<2, 1>;
    0x18 => XOR    => bitwise::bitxor => stack_io<2, 1>;
    0x19 => NOT    => bitwise::not    => stack_io<1, 1>;
    0x1A => BYTE   => bitwise::byte   => stack_io<2, 1>;
    0x1B => SHL    => bitwise::shl    => stack_io<2, 1>;
    0x1C => SHR    => bitwise::shr    => stack_io<2, 1>;
    0x1D => SAR    => bitwise::sar    => stack_io<2, 1>;
    0x1E => CLZ    => bitwise::clz    => stack_io<1, 1>;

    0x35 => CALLDATALOAD => data::calldataload => stack_io<1, 1>;

    0x3D => RETURNDATASIZE => data::returndatasize => stack_io<0, 1>;

    0x50 => POP => stack_ops::pop => stack_io<1, 0>;

    0x5F => PUSH0  => stack_ops::push0       => stack_io<0, 1>;
    0x60 => PUSH1  => stack_ops::push::<1>   => stack_io<0, 1>, imm_size<1>;
    0x61 => PUSH2  => stack_ops::push::<2>   => stack_io<0, 1>, imm_size<2>;
    0x62 => PUSH3  => stack_ops::push::<3>   => stack_io<0, 1>, imm_size<3>;
    0x63 => PUSH4  => stack_ops::push::<4>   => stack_io<0, 1>, imm_size<4>;
    0x64 => PUSH5  => stack_ops::push::<5>   => stack_io<0, 1>, imm_size<5>;
    0x65 => PUSH6  => stack_ops::push::<6>   => stack_io<0, 1>, imm_size<6>;
    0x66 => PUSH7  => stack_ops::push::<7>   => stack_io<0, 1>, imm_size<7>;
    0x67 => PUSH8  => stack_ops::push::<8>   => stack_io<0, 1>, imm_size<8>;
    0x68 => PUSH9  => stack_ops::push::<9>   => stack_io<0, 1>, imm_size<9>;
    0x69 => PUSH10 => stack_ops::push::<10>  => stack_io<0, 1>, imm_size<10>;
    0x6A => PUSH11 => stack_ops::push::<11>  => stack_io<0, 1>, imm_size<11>;
    0x6B => PUSH12 => stack_ops::push::<12>  => stack_io<0, 1>, imm_size<12>;
    0x6C => PUSH13 => stack_ops::push::<13>  => stack_io<0, 1>, imm_size<13>;
    0x6D => PUSH14 => stack_ops::push::<14>  => stack_io<0, 1>, imm_size<14>;
    0x6E => PUSH15 => stack_ops::push::<15>  => stack_io<0, 1>, imm_size<15>;
    0x6F => PUSH16 => stack_ops::push::<16>  => stack_io<0, 1>, imm_size<16>;
    0x70 => PUSH17 => stack_ops::push::<17>  => stack_io<0, 1>, imm_size<17>;
    0x71 => PUSH18 => stack_ops::push::<18>  => stack_io<0, 1>, imm_size<18>;
    0x72 => PUSH19 => stack_ops::push::<19>  => stack_io<0, 1>, imm_size<19>;
    0x73 => PUSH20 => stack_ops::push::<20>  => stack_io<0, 1>, imm_size<20>;
    0x74 => PUSH21 => stack_ops::push::<21>  => stack_io<0, 1>, imm_size<21>;
    0x75 => PUSH22 => stack_ops::push::<22>  => stack_io<0, 1>, imm_size<22>;
    0x76 => PUSH23 => stack_ops::push::<23>  => stack_io<0, 1>, imm_size<23>;
    0x77 => PUSH24 => stack_ops::push::<24>  => stack_io<0, 1>, imm_size<24>;
    0x78 => PUSH25 => stack_ops::push::<25>  => stack_io<0, 1>, imm_size<25>;
    0x79 => PUSH26 => stack_ops::push::<26>  => stack_io<0, 1>, imm_size<26>;
    0x7A => PUSH27 => stack_ops::push::<27>  => stack_io<0, 1>, imm_size<27>;
    0x7B => PUSH28 => stack_ops::push::<28>  => stack_io<0, 1>, imm_size<28>;
    0x7C => PUSH29 => stack_ops::push::<29>  => stack_io<0, 1>, imm_size<29>;
    0x7D => PUSH30 => stack_ops::push::<30>  => stack_io<0, 1>, imm_size<30>;
    0x7E => PUSH31 => stack_ops::push::<31>  => stack_io<0, 1>, imm_size<31>;
    0x7F => PUSH32 => stack_ops::push::<32>  => stack_io<0, 1>, imm_size<32>;

    0x80 => DUP1  => stack_ops::dup::<1>  => stack_io<1, 2>;
    0x81 => DUP2  => stack_ops::dup::<2>  => stack_io<2, 3>;
    0x82 => DUP3  => stack_ops::dup::<3>  => stack_io<3, 4>;
    0x83 => DUP4  => stack_ops::dup::<4>  => stack_io<4, 5>;
    0x84 => DUP5  => stack_ops::dup::<5>  => stack_io<5, 6>;
    0x85 => DUP6  => stack_ops::dup::<6>  => stack_io<6, 7>;
    0x86 => DUP7  => stack_ops::dup::<7>  => stack_io<7, 8>;
    0x87 => DUP8  => stack_ops::dup::<8>  => stack_io<8, 9>;
    0x88 => DUP9  => stack_ops::dup::<9>  => stack_io<9, 10>;
    0x89 => DUP10 => stack_ops::dup::<10> => stack_io<10, 11>;
    0x8A => DUP11 => stack_ops::dup::<11> => stack_io<11, 12>;
    0x8B => DUP12 => stack_ops::dup::<12> => stack_io<12, 13>;
    0x8C => DUP13 => stack_ops::dup::<13> => stack_io<13, 14>;
    0x8D => DUP14 => stack_ops::dup::<14> => stack_io<14, 15>;
    0x8E => DUP15 => stack_ops::dup::<15> => stack_io<15, 16>;
    0x8F => DUP16 => stack_ops::dup::<16> => stack_io<16, 17>;

    0x90 => SWAP1  => stack_ops::swap::<1>  => stack_io<2, 2>;
    0x91 => SWAP2  => stack_ops::swap::<2>  => stack_io<3, 3>;
    0x92 => SWAP3  => stack_ops::swap::<3>  => stack_io<4, 4>;
    0x93 => SWAP4  => stack_ops::swap::<4>  => stack_io<5, 5>;
    0x94 => SWAP5  => stack_ops::swap::<5>  => stack_io<6, 6>;
    0x95 => SWAP6  => stack_ops::swap::<6>  => stack_io<7, 7>;
    0x96 => SWAP7  => stack_ops::swap::<7>  => stack_io<8, 8>;
    0x97 => SWAP8  => stack_ops::swap::<8>  => stack_io<9, 9>;
    0x98 => SWAP9  => stack_ops::swap::<9>  => stack_io<10, 10>;
    0x99 => SWAP10 => stack_ops::swap::<10> => stack_io<11, 11>;
    0x9A => SWAP11 => stack_ops::swap::<11> => stack_io<12, 12>;
    0x9B => SWAP12 => stack_ops::swap::<12> => stack_io<13, 13>;
    0x9C => SWAP13 => stack_ops::swap::<13> => stack_io<14, 14>;
    0x9D => SWAP14 => stack_ops::swap::<14> => stack_io<15, 15>;
    0x9E => SWAP15 => stack_ops::swap::<15> => stack_io<16, 16>;
    0x9F => SWAP16 => stack_ops::swap::<16> => stack_io<17, 17>;

    0xEC => EOFCREATE => contract::eofcreate => stack_io<4, 1>, imm_size<1>;

    0xF7 => RETURNDATALOAD => data::returndataload => stack_io<1, 1>;
    0xF8 => EXTCALL        => contract::extcall    => stack_io<4, 1>;

    0xFE => INVALID => control::invalid => stack_io<0, 0>, terminating;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lookup() {
        let add = OpCode::new(ADD).unwrap();
        assert_eq!(add.as_str(), "ADD");
        assert_eq!(add.inputs(), 2);
        assert_eq!(add.outputs(), 1);
        assert!(!add.info().terminating);
        assert_eq!(add.get(), 0x01);

        let stop = OpCode::new(STOP).unwrap();
        assert!(stop.info().terminating);

        assert_eq!(OpCode::new(0x0C), None, "0x0C is unassigned");
        assert_eq!(OpCode::new(0x21), None, "0x21 is unassigned");
    }

    #[test]
    fn push_immediates_are_sized() {
        for n in 0..=31u8 {
            let opcode = OpCode::new(PUSH1 + n).unwrap();
            assert_eq!(opcode.immediate_size(), n + 1);
            assert_eq!(opcode.outputs(), 1);
        }
        assert_eq!(OpCode::new(PUSH0).unwrap().immediate_size(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(OpCode::new(MULMOD).unwrap().to_string(), "MULMOD");
    }
}
