/*!
table.rs - The 256-entry opcode table.

Purpose
=======
Maps every opcode byte to an `Instruction` descriptor: mnemonic (diagnostic
only), addressing mode, operation and base cycle count. The table is a
`static` array indexed directly by the opcode, so lookup has no failure path.
Undocumented opcodes map to their combined operations, the undocumented NOP
aliases map to `Op::Nop`, and the twelve locking opcodes map to `Op::Jam`.

Design
------
- Entries pair an `AddrMode` with an `Op` tag; `dispatch` matches on both.
- Base cycles exclude the conditional +1 page-cross penalty and the branch
  penalties, which are computed per step (see `cycles`).
- JAM entries cost 0 cycles.

Cycle counts follow the published NMOS 6502 opcode matrix.
*/

use crate::cpu::addressing::AddrMode::{self, *};

/// Operation tag. One variant per mnemonic; `USBC` ($EB) shares `Sbc`.
#[rustfmt::skip]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    // Documented
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    // Undocumented
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Ane, Lxa, Sbx,
    Sha, Shx, Shy, Tas, Las, Jam,
}

/// Static descriptor for one opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub op: Op,
    /// Base cycle count (0 for JAM).
    pub cycles: u8,
    illegal: bool,
}

impl Instruction {
    /// True for opcodes outside the documented 151.
    pub const fn is_illegal(&self) -> bool {
        self.illegal
    }

    /// Encoded length in bytes (opcode plus operand).
    pub const fn len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

const fn doc(mnemonic: &'static str, mode: AddrMode, op: Op, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        op,
        cycles,
        illegal: false,
    }
}

const fn ill(mnemonic: &'static str, mode: AddrMode, op: Op, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        op,
        cycles,
        illegal: true,
    }
}

/// Descriptor for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &INSTRUCTIONS[opcode as usize]
}

use Op::*;

#[rustfmt::skip]
pub static INSTRUCTIONS: [Instruction; 256] = [
    /* 00 */ doc("BRK", Implied, Brk, 7),
    /* 01 */ doc("ORA", IndirectX, Ora, 6),
    /* 02 */ ill("JAM", Implied, Jam, 0),
    /* 03 */ ill("SLO", IndirectX, Slo, 8),
    /* 04 */ ill("NOP", ZeroPage, Nop, 3),
    /* 05 */ doc("ORA", ZeroPage, Ora, 3),
    /* 06 */ doc("ASL", ZeroPage, Asl, 5),
    /* 07 */ ill("SLO", ZeroPage, Slo, 5),
    /* 08 */ doc("PHP", Implied, Php, 3),
    /* 09 */ doc("ORA", Immediate, Ora, 2),
    /* 0A */ doc("ASL", Accumulator, Asl, 2),
    /* 0B */ ill("ANC", Immediate, Anc, 2),
    /* 0C */ ill("NOP", Absolute, Nop, 4),
    /* 0D */ doc("ORA", Absolute, Ora, 4),
    /* 0E */ doc("ASL", Absolute, Asl, 6),
    /* 0F */ ill("SLO", Absolute, Slo, 6),
    /* 10 */ doc("BPL", Relative, Bpl, 2),
    /* 11 */ doc("ORA", IndirectY, Ora, 5),
    /* 12 */ ill("JAM", Implied, Jam, 0),
    /* 13 */ ill("SLO", IndirectY, Slo, 8),
    /* 14 */ ill("NOP", ZeroPageX, Nop, 4),
    /* 15 */ doc("ORA", ZeroPageX, Ora, 4),
    /* 16 */ doc("ASL", ZeroPageX, Asl, 6),
    /* 17 */ ill("SLO", ZeroPageX, Slo, 6),
    /* 18 */ doc("CLC", Implied, Clc, 2),
    /* 19 */ doc("ORA", AbsoluteY, Ora, 4),
    /* 1A */ ill("NOP", Implied, Nop, 2),
    /* 1B */ ill("SLO", AbsoluteY, Slo, 7),
    /* 1C */ ill("NOP", AbsoluteX, Nop, 4),
    /* 1D */ doc("ORA", AbsoluteX, Ora, 4),
    /* 1E */ doc("ASL", AbsoluteX, Asl, 7),
    /* 1F */ ill("SLO", AbsoluteX, Slo, 7),
    /* 20 */ doc("JSR", Absolute, Jsr, 6),
    /* 21 */ doc("AND", IndirectX, And, 6),
    /* 22 */ ill("JAM", Implied, Jam, 0),
    /* 23 */ ill("RLA", IndirectX, Rla, 8),
    /* 24 */ doc("BIT", ZeroPage, Bit, 3),
    /* 25 */ doc("AND", ZeroPage, And, 3),
    /* 26 */ doc("ROL", ZeroPage, Rol, 5),
    /* 27 */ ill("RLA", ZeroPage, Rla, 5),
    /* 28 */ doc("PLP", Implied, Plp, 4),
    /* 29 */ doc("AND", Immediate, And, 2),
    /* 2A */ doc("ROL", Accumulator, Rol, 2),
    /* 2B */ ill("ANC", Immediate, Anc, 2),
    /* 2C */ doc("BIT", Absolute, Bit, 4),
    /* 2D */ doc("AND", Absolute, And, 4),
    /* 2E */ doc("ROL", Absolute, Rol, 6),
    /* 2F */ ill("RLA", Absolute, Rla, 6),
    /* 30 */ doc("BMI", Relative, Bmi, 2),
    /* 31 */ doc("AND", IndirectY, And, 5),
    /* 32 */ ill("JAM", Implied, Jam, 0),
    /* 33 */ ill("RLA", IndirectY, Rla, 8),
    /* 34 */ ill("NOP", ZeroPageX, Nop, 4),
    /* 35 */ doc("AND", ZeroPageX, And, 4),
    /* 36 */ doc("ROL", ZeroPageX, Rol, 6),
    /* 37 */ ill("RLA", ZeroPageX, Rla, 6),
    /* 38 */ doc("SEC", Implied, Sec, 2),
    /* 39 */ doc("AND", AbsoluteY, And, 4),
    /* 3A */ ill("NOP", Implied, Nop, 2),
    /* 3B */ ill("RLA", AbsoluteY, Rla, 7),
    /* 3C */ ill("NOP", AbsoluteX, Nop, 4),
    /* 3D */ doc("AND", AbsoluteX, And, 4),
    /* 3E */ doc("ROL", AbsoluteX, Rol, 7),
    /* 3F */ ill("RLA", AbsoluteX, Rla, 7),
    /* 40 */ doc("RTI", Implied, Rti, 6),
    /* 41 */ doc("EOR", IndirectX, Eor, 6),
    /* 42 */ ill("JAM", Implied, Jam, 0),
    /* 43 */ ill("SRE", IndirectX, Sre, 8),
    /* 44 */ ill("NOP", ZeroPage, Nop, 3),
    /* 45 */ doc("EOR", ZeroPage, Eor, 3),
    /* 46 */ doc("LSR", ZeroPage, Lsr, 5),
    /* 47 */ ill("SRE", ZeroPage, Sre, 5),
    /* 48 */ doc("PHA", Implied, Pha, 3),
    /* 49 */ doc("EOR", Immediate, Eor, 2),
    /* 4A */ doc("LSR", Accumulator, Lsr, 2),
    /* 4B */ ill("ALR", Immediate, Alr, 2),
    /* 4C */ doc("JMP", Absolute, Jmp, 3),
    /* 4D */ doc("EOR", Absolute, Eor, 4),
    /* 4E */ doc("LSR", Absolute, Lsr, 6),
    /* 4F */ ill("SRE", Absolute, Sre, 6),
    /* 50 */ doc("BVC", Relative, Bvc, 2),
    /* 51 */ doc("EOR", IndirectY, Eor, 5),
    /* 52 */ ill("JAM", Implied, Jam, 0),
    /* 53 */ ill("SRE", IndirectY, Sre, 8),
    /* 54 */ ill("NOP", ZeroPageX, Nop, 4),
    /* 55 */ doc("EOR", ZeroPageX, Eor, 4),
    /* 56 */ doc("LSR", ZeroPageX, Lsr, 6),
    /* 57 */ ill("SRE", ZeroPageX, Sre, 6),
    /* 58 */ doc("CLI", Implied, Cli, 2),
    /* 59 */ doc("EOR", AbsoluteY, Eor, 4),
    /* 5A */ ill("NOP", Implied, Nop, 2),
    /* 5B */ ill("SRE", AbsoluteY, Sre, 7),
    /* 5C */ ill("NOP", AbsoluteX, Nop, 4),
    /* 5D */ doc("EOR", AbsoluteX, Eor, 4),
    /* 5E */ doc("LSR", AbsoluteX, Lsr, 7),
    /* 5F */ ill("SRE", AbsoluteX, Sre, 7),
    /* 60 */ doc("RTS", Implied, Rts, 6),
    /* 61 */ doc("ADC", IndirectX, Adc, 6),
    /* 62 */ ill("JAM", Implied, Jam, 0),
    /* 63 */ ill("RRA", IndirectX, Rra, 8),
    /* 64 */ ill("NOP", ZeroPage, Nop, 3),
    /* 65 */ doc("ADC", ZeroPage, Adc, 3),
    /* 66 */ doc("ROR", ZeroPage, Ror, 5),
    /* 67 */ ill("RRA", ZeroPage, Rra, 5),
    /* 68 */ doc("PLA", Implied, Pla, 4),
    /* 69 */ doc("ADC", Immediate, Adc, 2),
    /* 6A */ doc("ROR", Accumulator, Ror, 2),
    /* 6B */ ill("ARR", Immediate, Arr, 2),
    /* 6C */ doc("JMP", Indirect, Jmp, 5),
    /* 6D */ doc("ADC", Absolute, Adc, 4),
    /* 6E */ doc("ROR", Absolute, Ror, 6),
    /* 6F */ ill("RRA", Absolute, Rra, 6),
    /* 70 */ doc("BVS", Relative, Bvs, 2),
    /* 71 */ doc("ADC", IndirectY, Adc, 5),
    /* 72 */ ill("JAM", Implied, Jam, 0),
    /* 73 */ ill("RRA", IndirectY, Rra, 8),
    /* 74 */ ill("NOP", ZeroPageX, Nop, 4),
    /* 75 */ doc("ADC", ZeroPageX, Adc, 4),
    /* 76 */ doc("ROR", ZeroPageX, Ror, 6),
    /* 77 */ ill("RRA", ZeroPageX, Rra, 6),
    /* 78 */ doc("SEI", Implied, Sei, 2),
    /* 79 */ doc("ADC", AbsoluteY, Adc, 4),
    /* 7A */ ill("NOP", Implied, Nop, 2),
    /* 7B */ ill("RRA", AbsoluteY, Rra, 7),
    /* 7C */ ill("NOP", AbsoluteX, Nop, 4),
    /* 7D */ doc("ADC", AbsoluteX, Adc, 4),
    /* 7E */ doc("ROR", AbsoluteX, Ror, 7),
    /* 7F */ ill("RRA", AbsoluteX, Rra, 7),
    /* 80 */ ill("NOP", Immediate, Nop, 2),
    /* 81 */ doc("STA", IndirectX, Sta, 6),
    /* 82 */ ill("NOP", Immediate, Nop, 2),
    /* 83 */ ill("SAX", IndirectX, Sax, 6),
    /* 84 */ doc("STY", ZeroPage, Sty, 3),
    /* 85 */ doc("STA", ZeroPage, Sta, 3),
    /* 86 */ doc("STX", ZeroPage, Stx, 3),
    /* 87 */ ill("SAX", ZeroPage, Sax, 3),
    /* 88 */ doc("DEY", Implied, Dey, 2),
    /* 89 */ ill("NOP", Immediate, Nop, 2),
    /* 8A */ doc("TXA", Implied, Txa, 2),
    /* 8B */ ill("ANE", Immediate, Ane, 2),
    /* 8C */ doc("STY", Absolute, Sty, 4),
    /* 8D */ doc("STA", Absolute, Sta, 4),
    /* 8E */ doc("STX", Absolute, Stx, 4),
    /* 8F */ ill("SAX", Absolute, Sax, 4),
    /* 90 */ doc("BCC", Relative, Bcc, 2),
    /* 91 */ doc("STA", IndirectY, Sta, 6),
    /* 92 */ ill("JAM", Implied, Jam, 0),
    /* 93 */ ill("SHA", IndirectY, Sha, 6),
    /* 94 */ doc("STY", ZeroPageX, Sty, 4),
    /* 95 */ doc("STA", ZeroPageX, Sta, 4),
    /* 96 */ doc("STX", ZeroPageY, Stx, 4),
    /* 97 */ ill("SAX", ZeroPageY, Sax, 4),
    /* 98 */ doc("TYA", Implied, Tya, 2),
    /* 99 */ doc("STA", AbsoluteY, Sta, 5),
    /* 9A */ doc("TXS", Implied, Txs, 2),
    /* 9B */ ill("TAS", AbsoluteY, Tas, 5),
    /* 9C */ ill("SHY", AbsoluteX, Shy, 5),
    /* 9D */ doc("STA", AbsoluteX, Sta, 5),
    /* 9E */ ill("SHX", AbsoluteY, Shx, 5),
    /* 9F */ ill("SHA", AbsoluteY, Sha, 5),
    /* A0 */ doc("LDY", Immediate, Ldy, 2),
    /* A1 */ doc("LDA", IndirectX, Lda, 6),
    /* A2 */ doc("LDX", Immediate, Ldx, 2),
    /* A3 */ ill("LAX", IndirectX, Lax, 6),
    /* A4 */ doc("LDY", ZeroPage, Ldy, 3),
    /* A5 */ doc("LDA", ZeroPage, Lda, 3),
    /* A6 */ doc("LDX", ZeroPage, Ldx, 3),
    /* A7 */ ill("LAX", ZeroPage, Lax, 3),
    /* A8 */ doc("TAY", Implied, Tay, 2),
    /* A9 */ doc("LDA", Immediate, Lda, 2),
    /* AA */ doc("TAX", Implied, Tax, 2),
    /* AB */ ill("LXA", Immediate, Lxa, 2),
    /* AC */ doc("LDY", Absolute, Ldy, 4),
    /* AD */ doc("LDA", Absolute, Lda, 4),
    /* AE */ doc("LDX", Absolute, Ldx, 4),
    /* AF */ ill("LAX", Absolute, Lax, 4),
    /* B0 */ doc("BCS", Relative, Bcs, 2),
    /* B1 */ doc("LDA", IndirectY, Lda, 5),
    /* B2 */ ill("JAM", Implied, Jam, 0),
    /* B3 */ ill("LAX", IndirectY, Lax, 5),
    /* B4 */ doc("LDY", ZeroPageX, Ldy, 4),
    /* B5 */ doc("LDA", ZeroPageX, Lda, 4),
    /* B6 */ doc("LDX", ZeroPageY, Ldx, 4),
    /* B7 */ ill("LAX", ZeroPageY, Lax, 4),
    /* B8 */ doc("CLV", Implied, Clv, 2),
    /* B9 */ doc("LDA", AbsoluteY, Lda, 4),
    /* BA */ doc("TSX", Implied, Tsx, 2),
    /* BB */ ill("LAS", AbsoluteY, Las, 4),
    /* BC */ doc("LDY", AbsoluteX, Ldy, 4),
    /* BD */ doc("LDA", AbsoluteX, Lda, 4),
    /* BE */ doc("LDX", AbsoluteY, Ldx, 4),
    /* BF */ ill("LAX", AbsoluteY, Lax, 4),
    /* C0 */ doc("CPY", Immediate, Cpy, 2),
    /* C1 */ doc("CMP", IndirectX, Cmp, 6),
    /* C2 */ ill("NOP", Immediate, Nop, 2),
    /* C3 */ ill("DCP", IndirectX, Dcp, 8),
    /* C4 */ doc("CPY", ZeroPage, Cpy, 3),
    /* C5 */ doc("CMP", ZeroPage, Cmp, 3),
    /* C6 */ doc("DEC", ZeroPage, Dec, 5),
    /* C7 */ ill("DCP", ZeroPage, Dcp, 5),
    /* C8 */ doc("INY", Implied, Iny, 2),
    /* C9 */ doc("CMP", Immediate, Cmp, 2),
    /* CA */ doc("DEX", Implied, Dex, 2),
    /* CB */ ill("SBX", Immediate, Sbx, 2),
    /* CC */ doc("CPY", Absolute, Cpy, 4),
    /* CD */ doc("CMP", Absolute, Cmp, 4),
    /* CE */ doc("DEC", Absolute, Dec, 6),
    /* CF */ ill("DCP", Absolute, Dcp, 6),
    /* D0 */ doc("BNE", Relative, Bne, 2),
    /* D1 */ doc("CMP", IndirectY, Cmp, 5),
    /* D2 */ ill("JAM", Implied, Jam, 0),
    /* D3 */ ill("DCP", IndirectY, Dcp, 8),
    /* D4 */ ill("NOP", ZeroPageX, Nop, 4),
    /* D5 */ doc("CMP", ZeroPageX, Cmp, 4),
    /* D6 */ doc("DEC", ZeroPageX, Dec, 6),
    /* D7 */ ill("DCP", ZeroPageX, Dcp, 6),
    /* D8 */ doc("CLD", Implied, Cld, 2),
    /* D9 */ doc("CMP", AbsoluteY, Cmp, 4),
    /* DA */ ill("NOP", Implied, Nop, 2),
    /* DB */ ill("DCP", AbsoluteY, Dcp, 7),
    /* DC */ ill("NOP", AbsoluteX, Nop, 4),
    /* DD */ doc("CMP", AbsoluteX, Cmp, 4),
    /* DE */ doc("DEC", AbsoluteX, Dec, 7),
    /* DF */ ill("DCP", AbsoluteX, Dcp, 7),
    /* E0 */ doc("CPX", Immediate, Cpx, 2),
    /* E1 */ doc("SBC", IndirectX, Sbc, 6),
    /* E2 */ ill("NOP", Immediate, Nop, 2),
    /* E3 */ ill("ISC", IndirectX, Isc, 8),
    /* E4 */ doc("CPX", ZeroPage, Cpx, 3),
    /* E5 */ doc("SBC", ZeroPage, Sbc, 3),
    /* E6 */ doc("INC", ZeroPage, Inc, 5),
    /* E7 */ ill("ISC", ZeroPage, Isc, 5),
    /* E8 */ doc("INX", Implied, Inx, 2),
    /* E9 */ doc("SBC", Immediate, Sbc, 2),
    /* EA */ doc("NOP", Implied, Nop, 2),
    /* EB */ ill("USBC", Immediate, Sbc, 2),
    /* EC */ doc("CPX", Absolute, Cpx, 4),
    /* ED */ doc("SBC", Absolute, Sbc, 4),
    /* EE */ doc("INC", Absolute, Inc, 6),
    /* EF */ ill("ISC", Absolute, Isc, 6),
    /* F0 */ doc("BEQ", Relative, Beq, 2),
    /* F1 */ doc("SBC", IndirectY, Sbc, 5),
    /* F2 */ ill("JAM", Implied, Jam, 0),
    /* F3 */ ill("ISC", IndirectY, Isc, 8),
    /* F4 */ ill("NOP", ZeroPageX, Nop, 4),
    /* F5 */ doc("SBC", ZeroPageX, Sbc, 4),
    /* F6 */ doc("INC", ZeroPageX, Inc, 6),
    /* F7 */ ill("ISC", ZeroPageX, Isc, 6),
    /* F8 */ doc("SED", Implied, Sed, 2),
    /* F9 */ doc("SBC", AbsoluteY, Sbc, 4),
    /* FA */ ill("NOP", Implied, Nop, 2),
    /* FB */ ill("ISC", AbsoluteY, Isc, 7),
    /* FC */ ill("NOP", AbsoluteX, Nop, 4),
    /* FD */ doc("SBC", AbsoluteX, Sbc, 4),
    /* FE */ doc("INC", AbsoluteX, Inc, 7),
    /* FF */ ill("ISC", AbsoluteX, Isc, 7),
];
