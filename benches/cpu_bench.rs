use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crt6502::test_utils::build_nrom_with_prg;
use crt6502::{Bus, Cartridge, Cpu};

fn cpu_with_prg(prg: &[u8]) -> Cpu {
    let bytes = build_nrom_with_prg(prg);
    let bus = Bus::new(Cartridge::from_ines_bytes(&bytes).unwrap());
    let mut cpu = Cpu::new(bus);
    cpu.reset();
    cpu
}

fn bench_nop(c: &mut Criterion) {
    c.bench_function("step nop", |b| {
        b.iter_batched(
            || cpu_with_prg(&[0xEA]),
            |mut cpu| {
                cpu.step().unwrap();
                black_box(&cpu);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_lda_immediate(c: &mut Criterion) {
    c.bench_function("step lda immediate", |b| {
        b.iter_batched(
            || cpu_with_prg(&[0xA9, 0x42]),
            |mut cpu| {
                cpu.step().unwrap();
                black_box(&cpu);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_adc_immediate(c: &mut Criterion) {
    c.bench_function("step adc immediate", |b| {
        b.iter_batched(
            || cpu_with_prg(&[0x69, 0x01]),
            |mut cpu| {
                cpu.step().unwrap();
                black_box(&cpu);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_taken_branch(c: &mut Criterion) {
    c.bench_function("step taken branch", |b| {
        b.iter_batched(
            || {
                // LDA #$00 sets Z, then BEQ +2 is taken.
                let mut cpu = cpu_with_prg(&[0xA9, 0x00, 0xF0, 0x02]);
                cpu.step().unwrap();
                cpu
            },
            |mut cpu| {
                cpu.step().unwrap();
                black_box(&cpu);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_nop,
    bench_lda_immediate,
    bench_adc_immediate,
    bench_taken_branch
);
criterion_main!(benches);
