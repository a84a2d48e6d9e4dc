extern crate rbsp_golomb;

use rbsp_golomb::bitreader::BitReader;
use rbsp_golomb::error::Error;
use rbsp_golomb::golomb::{
    read_code_num, read_me, read_se, read_te, read_truncated_code_num,
    read_ue,
};

// Minimal Exp-Golomb bit writer used to build test buffers: k zeros,
// a one bit, then v + 1 - 2^k in k suffix bits.
#[derive(Default)]
struct BitWriter {
    bytes: Vec<u8>,
    used: usize,
}

impl BitWriter {
    fn push_bit(&mut self, bit: u8) {
        if self.used == 0 {
            self.bytes.push(0);
        }
        let last = self.bytes.last_mut().unwrap();
        *last |= bit << (7 - self.used);
        self.used = (self.used + 1) % 8;
    }

    fn push_ue(&mut self, v: u32) {
        let zeros = (31 - (v + 1).leading_zeros()) as usize;
        for _ in 0..zeros {
            self.push_bit(0);
        }
        self.push_bit(1);
        let suffix = v + 1 - (1 << zeros);
        for i in (0..zeros).rev() {
            self.push_bit(((suffix >> i) & 1) as u8);
        }
    }
}

#[test]
fn ue_round_trips_every_value_up_to_100000() {
    let mut w = BitWriter::default();
    for v in 0..=100_000 {
        w.push_ue(v);
    }
    let mut r = BitReader::new(&w.bytes);
    for v in 0..=100_000 {
        assert_eq!(read_ue(&mut r).unwrap(), v);
    }
}

#[test]
fn code_num_zero_is_a_single_one_bit() {
    let buf = [0b1000_0000u8];
    let mut r = BitReader::new(&buf);
    assert_eq!(read_code_num(&mut r).unwrap(), 0);
    assert_eq!(r.bit_pos(), 1);
}

#[test]
fn worked_example_0b00101000() {
    let buf = [0b0010_1000u8];

    let mut r = BitReader::new(&buf);
    assert_eq!(r.skip_leading_zeros().unwrap(), 2);
    assert_eq!(r.read_bits(2).unwrap(), vec![0, 1]);

    // codeNum = 2^2 - 1 + 1
    let mut r = BitReader::new(&buf);
    assert_eq!(read_ue(&mut r).unwrap(), 4);
}

#[test]
fn se_maps_code_numbers_zig_zag() {
    let mut w = BitWriter::default();
    for code_num in 0..6 {
        w.push_ue(code_num);
    }
    let mut r = BitReader::new(&w.bytes);
    for expected in &[0, 1, -1, 2, -2, 3] {
        assert_eq!(read_se(&mut r).unwrap(), *expected);
    }
}

#[test]
fn se_uses_exact_integer_ceiling_division() {
    let mut w = BitWriter::default();
    // Large odd and even code numbers around a power of two.
    w.push_ue(65_535);
    w.push_ue(65_536);
    let mut r = BitReader::new(&w.bytes);
    assert_eq!(read_se(&mut r).unwrap(), 32_768);
    assert_eq!(read_se(&mut r).unwrap(), -32_768);
}

#[test]
fn truncated_code_fails_mid_stream() {
    let buf = [0b0000_0000u8];
    let mut r = BitReader::new(&buf);
    assert!(matches!(read_ue(&mut r), Err(Error::EndOfStream(_))));

    let buf = [0b0001_0000u8];
    let mut r = BitReader::new(&buf);
    // The first code fits (0001000 -> 7); the lone zero bit left over
    // cannot start a complete code.
    assert_eq!(read_ue(&mut r).unwrap(), 7);
    assert!(matches!(read_ue(&mut r), Err(Error::EndOfStream(_))));
}

#[test]
fn unmapped_forms_fail_loudly() {
    let buf = [0b1000_0000u8];
    let mut r = BitReader::new(&buf);
    assert!(matches!(
        read_truncated_code_num(&mut r),
        Err(Error::Unimplemented(_))
    ));
    assert!(matches!(read_me(&mut r), Err(Error::Unimplemented(_))));
    assert!(matches!(read_te(&mut r), Err(Error::Unimplemented(_))));
    // The stubs never touch the cursor.
    assert_eq!(r.bit_pos(), 0);
}
