/*!
table.rs - Static opcode decode table.

Purpose
=======
Maps each of the 256 opcode bytes to an `OpcodeEntry` pairing an `Operation`
with an `AddressingMode`. Dispatch matches exhaustively on `Operation`, so
adding a variant without a handler is a compile error rather than a runtime miss.

Coverage
--------
- All 151 documented opcodes.
- Undocumented opcodes commonly relied on by test ROMs: LAX, SAX, DCP, ISC,
  SLO, RLA, SRE, RRA, the DOP/TOP multi-byte NOPs, and SBC #imm at $EB.
- Every other byte decodes to `Operation::Unassigned` with `Implied` mode: it
  consumes no operand bytes and costs its tabulated base cycles.

Page-cross policy
-----------------
Read operations use the penalty variants of Absolute,X / Absolute,Y /
(Indirect),Y. Stores and read-modify-write operations (documented or not) use
the non-penalty variants. LAX abs,Y ($BF) is tabulated without the penalty.
*/

use crate::cpu::addressing::AddressingMode;

/// Instruction semantics, independent of addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented
    Lax,
    Sax,
    Dcp,
    Isc,
    Slo,
    Rla,
    Sre,
    Rra,
    Dop,
    Top,
    /// No entry for this byte: a no-op costing the tabulated cycles.
    Unassigned,
}

impl Operation {
    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Adc => "ADC",
            Self::And => "AND",
            Self::Asl => "ASL",
            Self::Bcc => "BCC",
            Self::Bcs => "BCS",
            Self::Beq => "BEQ",
            Self::Bit => "BIT",
            Self::Bmi => "BMI",
            Self::Bne => "BNE",
            Self::Bpl => "BPL",
            Self::Brk => "BRK",
            Self::Bvc => "BVC",
            Self::Bvs => "BVS",
            Self::Clc => "CLC",
            Self::Cld => "CLD",
            Self::Cli => "CLI",
            Self::Clv => "CLV",
            Self::Cmp => "CMP",
            Self::Cpx => "CPX",
            Self::Cpy => "CPY",
            Self::Dec => "DEC",
            Self::Dex => "DEX",
            Self::Dey => "DEY",
            Self::Eor => "EOR",
            Self::Inc => "INC",
            Self::Inx => "INX",
            Self::Iny => "INY",
            Self::Jmp => "JMP",
            Self::Jsr => "JSR",
            Self::Lda => "LDA",
            Self::Ldx => "LDX",
            Self::Ldy => "LDY",
            Self::Lsr => "LSR",
            Self::Nop | Self::Dop | Self::Top | Self::Unassigned => "NOP",
            Self::Ora => "ORA",
            Self::Pha => "PHA",
            Self::Php => "PHP",
            Self::Pla => "PLA",
            Self::Plp => "PLP",
            Self::Rol => "ROL",
            Self::Ror => "ROR",
            Self::Rti => "RTI",
            Self::Rts => "RTS",
            Self::Sbc => "SBC",
            Self::Sec => "SEC",
            Self::Sed => "SED",
            Self::Sei => "SEI",
            Self::Sta => "STA",
            Self::Stx => "STX",
            Self::Sty => "STY",
            Self::Tax => "TAX",
            Self::Tay => "TAY",
            Self::Tsx => "TSX",
            Self::Txa => "TXA",
            Self::Txs => "TXS",
            Self::Tya => "TYA",
            Self::Lax => "LAX",
            Self::Sax => "SAX",
            Self::Dcp => "DCP",
            Self::Isc => "ISB",
            Self::Slo => "SLO",
            Self::Rla => "RLA",
            Self::Sre => "SRE",
            Self::Rra => "RRA",
        }
    }

    /// True for operations outside the documented 6502 instruction set.
    pub const fn is_undocumented(self) -> bool {
        matches!(
            self,
            Self::Lax
                | Self::Sax
                | Self::Dcp
                | Self::Isc
                | Self::Slo
                | Self::Rla
                | Self::Sre
                | Self::Rra
                | Self::Dop
                | Self::Top
                | Self::Unassigned
        )
    }
}

/// One decoded opcode: what to do and where the operand lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub op: Operation,
    pub mode: AddressingMode,
}

impl OpcodeEntry {
    pub const UNASSIGNED: Self = Self::new(Operation::Unassigned, AddressingMode::Implied);

    pub const fn new(op: Operation, mode: AddressingMode) -> Self {
        Self { op, mode }
    }
}

/// Decode an opcode byte.
#[inline]
pub fn decode(opcode: u8) -> OpcodeEntry {
    OPCODE_TABLE[opcode as usize]
}

const ABS_X: AddressingMode = AddressingMode::AbsoluteX { penalty: false };
const ABS_X_PENALTY: AddressingMode = AddressingMode::AbsoluteX { penalty: true };
const ABS_Y: AddressingMode = AddressingMode::AbsoluteY { penalty: false };
const ABS_Y_PENALTY: AddressingMode = AddressingMode::AbsoluteY { penalty: true };
const IND_Y: AddressingMode = AddressingMode::IndirectY { penalty: false };
const IND_Y_PENALTY: AddressingMode = AddressingMode::IndirectY { penalty: true };
const IND_WRAP: AddressingMode = AddressingMode::Indirect { page_wrap: true };

/// The 256-entry decode table.
pub static OPCODE_TABLE: [OpcodeEntry; 256] = {
    use AddressingMode::{
        Absolute, Accumulator, Immediate, Implied, IndirectX, Relative, ZeroPage, ZeroPageX,
        ZeroPageY,
    };
    use Operation::*;

    let mut t = [OpcodeEntry::UNASSIGNED; 256];
    const fn e(op: Operation, mode: AddressingMode) -> OpcodeEntry {
        OpcodeEntry::new(op, mode)
    }

    // ---- Loads / stores ----
    t[0xA9] = e(Lda, Immediate);
    t[0xA5] = e(Lda, ZeroPage);
    t[0xB5] = e(Lda, ZeroPageX);
    t[0xAD] = e(Lda, Absolute);
    t[0xBD] = e(Lda, ABS_X_PENALTY);
    t[0xB9] = e(Lda, ABS_Y_PENALTY);
    t[0xA1] = e(Lda, IndirectX);
    t[0xB1] = e(Lda, IND_Y_PENALTY);

    t[0xA2] = e(Ldx, Immediate);
    t[0xA6] = e(Ldx, ZeroPage);
    t[0xB6] = e(Ldx, ZeroPageY);
    t[0xAE] = e(Ldx, Absolute);
    t[0xBE] = e(Ldx, ABS_Y_PENALTY);

    t[0xA0] = e(Ldy, Immediate);
    t[0xA4] = e(Ldy, ZeroPage);
    t[0xB4] = e(Ldy, ZeroPageX);
    t[0xAC] = e(Ldy, Absolute);
    t[0xBC] = e(Ldy, ABS_X_PENALTY);

    t[0x85] = e(Sta, ZeroPage);
    t[0x95] = e(Sta, ZeroPageX);
    t[0x8D] = e(Sta, Absolute);
    t[0x9D] = e(Sta, ABS_X);
    t[0x99] = e(Sta, ABS_Y);
    t[0x81] = e(Sta, IndirectX);
    t[0x91] = e(Sta, IND_Y);

    t[0x86] = e(Stx, ZeroPage);
    t[0x96] = e(Stx, ZeroPageY);
    t[0x8E] = e(Stx, Absolute);

    t[0x84] = e(Sty, ZeroPage);
    t[0x94] = e(Sty, ZeroPageX);
    t[0x8C] = e(Sty, Absolute);

    // ---- Arithmetic ----
    t[0x69] = e(Adc, Immediate);
    t[0x65] = e(Adc, ZeroPage);
    t[0x75] = e(Adc, ZeroPageX);
    t[0x6D] = e(Adc, Absolute);
    t[0x7D] = e(Adc, ABS_X_PENALTY);
    t[0x79] = e(Adc, ABS_Y_PENALTY);
    t[0x61] = e(Adc, IndirectX);
    t[0x71] = e(Adc, IND_Y_PENALTY);

    t[0xE9] = e(Sbc, Immediate);
    t[0xE5] = e(Sbc, ZeroPage);
    t[0xF5] = e(Sbc, ZeroPageX);
    t[0xED] = e(Sbc, Absolute);
    t[0xFD] = e(Sbc, ABS_X_PENALTY);
    t[0xF9] = e(Sbc, ABS_Y_PENALTY);
    t[0xE1] = e(Sbc, IndirectX);
    t[0xF1] = e(Sbc, IND_Y_PENALTY);
    t[0xEB] = e(Sbc, Immediate);

    // ---- Logical ----
    t[0x29] = e(And, Immediate);
    t[0x25] = e(And, ZeroPage);
    t[0x35] = e(And, ZeroPageX);
    t[0x2D] = e(And, Absolute);
    t[0x3D] = e(And, ABS_X_PENALTY);
    t[0x39] = e(And, ABS_Y_PENALTY);
    t[0x21] = e(And, IndirectX);
    t[0x31] = e(And, IND_Y_PENALTY);

    t[0x09] = e(Ora, Immediate);
    t[0x05] = e(Ora, ZeroPage);
    t[0x15] = e(Ora, ZeroPageX);
    t[0x0D] = e(Ora, Absolute);
    t[0x1D] = e(Ora, ABS_X_PENALTY);
    t[0x19] = e(Ora, ABS_Y_PENALTY);
    t[0x01] = e(Ora, IndirectX);
    t[0x11] = e(Ora, IND_Y_PENALTY);

    t[0x49] = e(Eor, Immediate);
    t[0x45] = e(Eor, ZeroPage);
    t[0x55] = e(Eor, ZeroPageX);
    t[0x4D] = e(Eor, Absolute);
    t[0x5D] = e(Eor, ABS_X_PENALTY);
    t[0x59] = e(Eor, ABS_Y_PENALTY);
    t[0x41] = e(Eor, IndirectX);
    t[0x51] = e(Eor, IND_Y_PENALTY);

    t[0x24] = e(Bit, ZeroPage);
    t[0x2C] = e(Bit, Absolute);

    // ---- Compare ----
    t[0xC9] = e(Cmp, Immediate);
    t[0xC5] = e(Cmp, ZeroPage);
    t[0xD5] = e(Cmp, ZeroPageX);
    t[0xCD] = e(Cmp, Absolute);
    t[0xDD] = e(Cmp, ABS_X_PENALTY);
    t[0xD9] = e(Cmp, ABS_Y_PENALTY);
    t[0xC1] = e(Cmp, IndirectX);
    t[0xD1] = e(Cmp, IND_Y_PENALTY);

    t[0xE0] = e(Cpx, Immediate);
    t[0xE4] = e(Cpx, ZeroPage);
    t[0xEC] = e(Cpx, Absolute);

    t[0xC0] = e(Cpy, Immediate);
    t[0xC4] = e(Cpy, ZeroPage);
    t[0xCC] = e(Cpy, Absolute);

    // ---- Shifts / rotates / INC / DEC ----
    t[0x0A] = e(Asl, Accumulator);
    t[0x06] = e(Asl, ZeroPage);
    t[0x16] = e(Asl, ZeroPageX);
    t[0x0E] = e(Asl, Absolute);
    t[0x1E] = e(Asl, ABS_X);

    t[0x4A] = e(Lsr, Accumulator);
    t[0x46] = e(Lsr, ZeroPage);
    t[0x56] = e(Lsr, ZeroPageX);
    t[0x4E] = e(Lsr, Absolute);
    t[0x5E] = e(Lsr, ABS_X);

    t[0x2A] = e(Rol, Accumulator);
    t[0x26] = e(Rol, ZeroPage);
    t[0x36] = e(Rol, ZeroPageX);
    t[0x2E] = e(Rol, Absolute);
    t[0x3E] = e(Rol, ABS_X);

    t[0x6A] = e(Ror, Accumulator);
    t[0x66] = e(Ror, ZeroPage);
    t[0x76] = e(Ror, ZeroPageX);
    t[0x6E] = e(Ror, Absolute);
    t[0x7E] = e(Ror, ABS_X);

    t[0xE6] = e(Inc, ZeroPage);
    t[0xF6] = e(Inc, ZeroPageX);
    t[0xEE] = e(Inc, Absolute);
    t[0xFE] = e(Inc, ABS_X);

    t[0xC6] = e(Dec, ZeroPage);
    t[0xD6] = e(Dec, ZeroPageX);
    t[0xCE] = e(Dec, Absolute);
    t[0xDE] = e(Dec, ABS_X);

    t[0xE8] = e(Inx, Implied);
    t[0xC8] = e(Iny, Implied);
    t[0xCA] = e(Dex, Implied);
    t[0x88] = e(Dey, Implied);

    // ---- Branches ----
    t[0x10] = e(Bpl, Relative);
    t[0x30] = e(Bmi, Relative);
    t[0x50] = e(Bvc, Relative);
    t[0x70] = e(Bvs, Relative);
    t[0x90] = e(Bcc, Relative);
    t[0xB0] = e(Bcs, Relative);
    t[0xD0] = e(Bne, Relative);
    t[0xF0] = e(Beq, Relative);

    // ---- Control flow ----
    t[0x4C] = e(Jmp, Absolute);
    t[0x6C] = e(Jmp, IND_WRAP);
    t[0x20] = e(Jsr, Absolute);
    t[0x60] = e(Rts, Implied);
    t[0x40] = e(Rti, Implied);
    t[0x00] = e(Brk, Implied);

    // ---- Stack / transfers / flags ----
    t[0x48] = e(Pha, Implied);
    t[0x08] = e(Php, Implied);
    t[0x68] = e(Pla, Implied);
    t[0x28] = e(Plp, Implied);

    t[0xAA] = e(Tax, Implied);
    t[0xA8] = e(Tay, Implied);
    t[0x8A] = e(Txa, Implied);
    t[0x98] = e(Tya, Implied);
    t[0xBA] = e(Tsx, Implied);
    t[0x9A] = e(Txs, Implied);

    t[0x18] = e(Clc, Implied);
    t[0x38] = e(Sec, Implied);
    t[0x58] = e(Cli, Implied);
    t[0x78] = e(Sei, Implied);
    t[0xB8] = e(Clv, Implied);
    t[0xD8] = e(Cld, Implied);
    t[0xF8] = e(Sed, Implied);

    t[0xEA] = e(Nop, Implied);

    // ---- Undocumented: multi-byte NOPs ----
    t[0x04] = e(Dop, ZeroPage);
    t[0x44] = e(Dop, ZeroPage);
    t[0x64] = e(Dop, ZeroPage);
    t[0x14] = e(Dop, ZeroPageX);
    t[0x34] = e(Dop, ZeroPageX);
    t[0x54] = e(Dop, ZeroPageX);
    t[0x74] = e(Dop, ZeroPageX);
    t[0xD4] = e(Dop, ZeroPageX);
    t[0xF4] = e(Dop, ZeroPageX);
    t[0x80] = e(Dop, Immediate);
    t[0x82] = e(Dop, Immediate);
    t[0x89] = e(Dop, Immediate);
    t[0xC2] = e(Dop, Immediate);
    t[0xE2] = e(Dop, Immediate);

    t[0x0C] = e(Top, Absolute);
    t[0x1C] = e(Top, ABS_X_PENALTY);
    t[0x3C] = e(Top, ABS_X_PENALTY);
    t[0x5C] = e(Top, ABS_X_PENALTY);
    t[0x7C] = e(Top, ABS_X_PENALTY);
    t[0xDC] = e(Top, ABS_X_PENALTY);
    t[0xFC] = e(Top, ABS_X_PENALTY);

    // ---- Undocumented: LAX / SAX ----
    t[0xA7] = e(Lax, ZeroPage);
    t[0xB7] = e(Lax, ZeroPageY);
    t[0xAF] = e(Lax, Absolute);
    t[0xBF] = e(Lax, ABS_Y);
    t[0xA3] = e(Lax, IndirectX);
    t[0xB3] = e(Lax, IND_Y_PENALTY);

    t[0x87] = e(Sax, ZeroPage);
    t[0x97] = e(Sax, ZeroPageY);
    t[0x8F] = e(Sax, Absolute);
    t[0x83] = e(Sax, IndirectX);

    // ---- Undocumented: read-modify-write combos ----
    t[0xC7] = e(Dcp, ZeroPage);
    t[0xD7] = e(Dcp, ZeroPageX);
    t[0xCF] = e(Dcp, Absolute);
    t[0xDF] = e(Dcp, ABS_X);
    t[0xDB] = e(Dcp, ABS_Y);
    t[0xC3] = e(Dcp, IndirectX);
    t[0xD3] = e(Dcp, IND_Y);

    t[0xE7] = e(Isc, ZeroPage);
    t[0xF7] = e(Isc, ZeroPageX);
    t[0xEF] = e(Isc, Absolute);
    t[0xFF] = e(Isc, ABS_X);
    t[0xFB] = e(Isc, ABS_Y);
    t[0xE3] = e(Isc, IndirectX);
    t[0xF3] = e(Isc, IND_Y);

    t[0x07] = e(Slo, ZeroPage);
    t[0x17] = e(Slo, ZeroPageX);
    t[0x0F] = e(Slo, Absolute);
    t[0x1F] = e(Slo, ABS_X);
    t[0x1B] = e(Slo, ABS_Y);
    t[0x03] = e(Slo, IndirectX);
    t[0x13] = e(Slo, IND_Y);

    t[0x27] = e(Rla, ZeroPage);
    t[0x37] = e(Rla, ZeroPageX);
    t[0x2F] = e(Rla, Absolute);
    t[0x3F] = e(Rla, ABS_X);
    t[0x3B] = e(Rla, ABS_Y);
    t[0x23] = e(Rla, IndirectX);
    t[0x33] = e(Rla, IND_Y);

    t[0x47] = e(Sre, ZeroPage);
    t[0x57] = e(Sre, ZeroPageX);
    t[0x4F] = e(Sre, Absolute);
    t[0x5F] = e(Sre, ABS_X);
    t[0x5B] = e(Sre, ABS_Y);
    t[0x43] = e(Sre, IndirectX);
    t[0x53] = e(Sre, IND_Y);

    t[0x67] = e(Rra, ZeroPage);
    t[0x77] = e(Rra, ZeroPageX);
    t[0x6F] = e(Rra, Absolute);
    t[0x7F] = e(Rra, ABS_X);
    t[0x7B] = e(Rra, ABS_Y);
    t[0x63] = e(Rra, IndirectX);
    t[0x73] = e(Rra, IND_Y);

    t
};
