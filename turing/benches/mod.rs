#![feature(test)]
extern crate test;

cipher::stream_cipher_bench!(
    Init: {
        let core = turing::TuringCore::new(b"test key 128bits", &[0; 8], turing::Variant::Fast);
        turing::Turing::from_core(core.unwrap())
    };
    turing_bench1_16b 16;
    turing_bench2_256b 256;
    turing_bench3_1kib 1024;
    turing_bench4_16kib 16384;
);
