//! Constant tables shared by every backend.

/// 8-bit S-box: the state of RC4 keyed with `"Alan Turing"` after its
/// keystream generator has been advanced.
pub(crate) const SBOX: [u8; 256] = [
    0x61, 0x51, 0xeb, 0x19, 0xb9, 0x5d, 0x60, 0x38,
    0x7c, 0xb2, 0x06, 0x12, 0xc4, 0x5b, 0x16, 0x3b,
    0x2b, 0x18, 0x83, 0xb0, 0x7f, 0x75, 0xfa, 0xa0,
    0xe9, 0xdd, 0x6d, 0x7a, 0x6b, 0x68, 0x2d, 0x49,
    0xb5, 0x1c, 0x90, 0xf7, 0xed, 0x9f, 0xe8, 0xce,
    0xae, 0x77, 0xc2, 0x13, 0xfd, 0xcd, 0x3e, 0xcf,
    0x37, 0x6a, 0xd4, 0xdb, 0x8e, 0x65, 0x1f, 0x1a,
    0x87, 0xcb, 0x40, 0x15, 0x88, 0x0d, 0x35, 0xb3,
    0x11, 0x0f, 0xd0, 0x30, 0x48, 0xf9, 0xa8, 0xac,
    0x85, 0x27, 0x0e, 0x8a, 0xe0, 0x50, 0x64, 0xa7,
    0xcc, 0xe4, 0xf1, 0x98, 0xff, 0xa1, 0x04, 0xda,
    0xd5, 0xbc, 0x1b, 0xbb, 0xd1, 0xfe, 0x31, 0xca,
    0xba, 0xd9, 0x2e, 0xf3, 0x1d, 0x47, 0x4a, 0x3d,
    0x71, 0x4c, 0xab, 0x7d, 0x8d, 0xc7, 0x59, 0xb8,
    0xc1, 0x96, 0x1e, 0xfc, 0x44, 0xc8, 0x7b, 0xdc,
    0x5c, 0x78, 0x2a, 0xe7, 0xa5, 0xf0, 0x73, 0x22,
    0x89, 0x05, 0xf4, 0x07, 0x21, 0x52, 0xa6, 0x28,
    0x9a, 0x92, 0x69, 0x8f, 0xc5, 0xc3, 0xf5, 0xe1,
    0xde, 0xec, 0x09, 0xf2, 0x9e, 0xaf, 0x34, 0x23,
    0xaa, 0xdf, 0x7e, 0x82, 0x29, 0xc0, 0x24, 0x14,
    0x03, 0x32, 0x4e, 0x39, 0x6f, 0xc6, 0xb1, 0x9b,
    0xea, 0x72, 0x79, 0x41, 0xd8, 0x26, 0x6c, 0x5e,
    0x2c, 0xb4, 0xa2, 0x53, 0x57, 0xe2, 0x9c, 0x86,
    0x54, 0x95, 0xb6, 0x80, 0x8c, 0x36, 0x67, 0xbd,
    0x08, 0x93, 0x2f, 0x99, 0x5a, 0xf8, 0x3a, 0xd7,
    0x56, 0x84, 0x4f, 0x01, 0xf6, 0x66, 0x4d, 0x55,
    0x8b, 0x0c, 0x0b, 0x46, 0xb7, 0x3c, 0x45, 0x91,
    0xa4, 0xe3, 0x70, 0xd6, 0xfb, 0xe6, 0x10, 0xa9,
    0xc9, 0x4b, 0xd3, 0x9d, 0xd2, 0x76, 0x25, 0x3f,
    0x5f, 0xa3, 0x33, 0x20, 0x02, 0xef, 0x62, 0x74,
    0xee, 0x17, 0x81, 0x42, 0x58, 0x0a, 0x00, 0x63,
    0xe5, 0xbe, 0x6e, 0xad, 0xbf, 0x43, 0x94, 0x97,
];

/// 8x32 Q-box used by the S-box word transforms.
pub(crate) const QBOX: [u32; 256] = [
    0x1faa1887, 0x4e5e435c, 0x9165c042, 0x250e6ef4,
    0x5957ee20, 0xd484fed3, 0xa666c502, 0x7e54e8ae,
    0xd12ee9d9, 0xfc1f38d4, 0x49829b5d, 0x1b5cdf3c,
    0x74864249, 0xda2e3963, 0x28f4429f, 0xc8432c35,
    0x4af40325, 0x9fc0dd70, 0xd8973ded, 0x1a02dc5e,
    0xcd175b42, 0xf10012bf, 0x6694d78c, 0xacaab26b,
    0x4ec11b9a, 0x3f168146, 0xc0ea8ec5, 0xb38ac28f,
    0x1fed5c0f, 0xaab4101c, 0xea2db082, 0x470929e1,
    0xe71843de, 0x508299fc, 0xe72fbc4b, 0x2e3915dd,
    0x9fa803fa, 0x9546b2de, 0x3c233342, 0x0fcee7c3,
    0x24d607ef, 0x8f97ebab, 0xf37f859b, 0xcd1f2e2f,
    0xc25b71da, 0x75e2269a, 0x1e39c3d1, 0xeda56b36,
    0xf8c9def2, 0x46c9fc5f, 0x1827b3a3, 0x70a56ddf,
    0x0d25b510, 0x000f85a7, 0xb2e82e71, 0x68cb8529,
    0x8fcfdea8, 0x17b33e78, 0x84a0df02, 0xaaeb6640,
    0xe70b4e5b, 0x2be7a97f, 0xdb7f1bf4, 0x6c28e4d8,
    0x5d3c52d8, 0x3ffff30e, 0x23b54fba, 0xdb46a5da,
    0x84f33d3d, 0x1eeaa8a4, 0x4ed83e2d, 0x4d57c6e5,
    0xce6bf1d3, 0x2e66bd2d, 0x6c5c46ab, 0xbfae4eb0,
    0x1a1bd4f4, 0x09e3f54b, 0x8b2d4a7e, 0x6e2bda50,
    0x2b2f4a1c, 0xb2c40d8f, 0x39e56c4d, 0x58a2d35c,
    0x0d0a4a9c, 0xdb7f83ac, 0x1b8e0c80, 0x3e8b2b0f,
    0x59e3bf3c, 0x0db1b9ad, 0xd6f2e7f0, 0x5f8ad1a4,
    0x9e8c4a54, 0xf2d2b6c6, 0x3a1f28c7, 0x80a6a44c,
    0x67a3f0d6, 0x4e15d7e7, 0x6d6c2fb8, 0xe88e9d89,
    0x19a9e21c, 0x4b6c79a6, 0xe20a5c4d, 0xd5a71e6b,
    0x40e1b7d3, 0xad8b3c9e, 0x1ea4a8d6, 0xf4c2f8a8,
    0x3cc1b5e5, 0x9f4ea3a4, 0xcb52ac73, 0x34f80e56,
    0xf18b5d2e, 0x4a8c7a9b, 0x2ff53b7e, 0x8a19f6c0,
    0x56f6d6f3, 0x6ed1d0c2, 0xb0b8a1c6, 0xc41e37b9,
    0x7ec47d85, 0x1f2fa7c2, 0x6ef54f46, 0x5f1f3a25,
    0x4c7e0a7b, 0x8b9d5fa3, 0x3e0d0d2a, 0xe42a3a0b,
    0xaf6da1e1, 0x9e3a4c0d, 0x0f7b5a2c, 0xb6e4a1d8,
    0x61d4c2f7, 0x8e5b2d3a, 0x2c9fa1e6, 0x0d4e8b7c,
    0x93a6f1c2, 0x5b7e3d08, 0xc8f2a91d, 0x4e1b6d5a,
    0xa27c9e41, 0x36d58f0b, 0xfb1e4c72, 0x0c8a3e5d,
    0x7d2f91a6, 0xe5b04c38, 0x1a6e9d27, 0xc3f57b80,
    0x58a1e4f9, 0x96c32d0e, 0x2fb87a61, 0xd04e19c5,
    0x4b9d6f32, 0xa8e27c1b, 0x61f05d94, 0xbd3a8e07,
    0x0e7c4ab9, 0xf2d9163e, 0x85b1e04c, 0x3c6fa2d8,
    0xe9405b17, 0x1d8bc3f6, 0x7a25e90d, 0xc6f1384a,
    0x53ae7d02, 0x8f14c6b9, 0x24d98a5e, 0xbe6207f1,
    0x09c5f3a8, 0xd73e6b14, 0x6a81d2cf, 0x41fb9e36,
    0xf5281c7d, 0x9cb0e643, 0x2e47a5b8, 0x87d31f0a,
    0x3b6c94e2, 0xc0a8572d, 0x5ef31b89, 0xa41d6ec7,
    0x12b9f058, 0xe87c2a93, 0x76d5410e, 0xcd2e8fb4,
    0x0b61d7a3, 0x94fe3c58, 0x3fa8b26d, 0xe21547c9,
    0x68dc0a3f, 0xb5437e91, 0x1c9ae524, 0xdf06b87a,
    0x4d72c1e8, 0xa0b95f36, 0x7c14e3db, 0x39ea068f,
    0xf64d2ab1, 0x8b31c7e4, 0x25f89d40, 0xc9a6135b,
    0x50e47fc2, 0x1eb3a86d, 0xab2d54f7, 0x638fe109,
    0xd95c3b26, 0x07a1f8e4, 0x8e4b72c3, 0x3274dd19,
    0xc18e6f5a, 0x5fd2a807, 0x16b94ce3, 0xea603d8b,
    0x7b0f95d4, 0xa4d82e61, 0x2361bf9e, 0xf8c70a45,
    0x6c3e58f1, 0x91a5c21d, 0x0fd47b8a, 0xd27b1e36,
    0x45e9a60c, 0xbc1f83d7, 0x3a86d549, 0xe3520fb2,
    0x18cb7e65, 0x8d6a31f8, 0x54b3ec0a, 0xc92f46d1,
    0x7ef1b893, 0x2b58d43c, 0xf06c1da7, 0x0a97e25e,
    0x9343cf18, 0x47b2065d, 0xe81dab74, 0x3ce570c2,
    0xb67a1d0f, 0x0c38e4a9, 0x61d59b36, 0xdf0e42e8,
    0x2ab7f15c, 0xc56c0883, 0x7892d64b, 0x04fa3b97,
    0xa1e38c2d, 0x5e2b7f40, 0xfd4610be, 0x39c8a573,
    0x8617dbe1, 0x1bf94c28, 0xc2a065f4, 0x6d5d9a0b,
    0xf3842e79, 0x0e71b3c6, 0xb9ce5815, 0x54236fda,
];

/// Multiplication of a byte by the LFSR feedback constant over GF(2^8)
/// (field polynomial `0x14d`), spread across the four byte lanes.
pub(crate) const MULTAB: [u32; 256] = [
    0x00000000, 0xd02b4367, 0xed5686ce, 0x3d7dc5a9,
    0x97ac41d1, 0x478702b6, 0x7afac71f, 0xaad18478,
    0x631582ef, 0xb33ec188, 0x8e430421, 0x5e684746,
    0xf4b9c33e, 0x24928059, 0x19ef45f0, 0xc9c40697,
    0xc62a4993, 0x16010af4, 0x2b7ccf5d, 0xfb578c3a,
    0x51860842, 0x81ad4b25, 0xbcd08e8c, 0x6cfbcdeb,
    0xa53fcb7c, 0x7514881b, 0x48694db2, 0x98420ed5,
    0x32938aad, 0xe2b8c9ca, 0xdfc50c63, 0x0fee4f04,
    0xc154926b, 0x117fd10c, 0x2c0214a5, 0xfc2957c2,
    0x56f8d3ba, 0x86d390dd, 0xbbae5574, 0x6b851613,
    0xa2411084, 0x726a53e3, 0x4f17964a, 0x9f3cd52d,
    0x35ed5155, 0xe5c61232, 0xd8bbd79b, 0x089094fc,
    0x077edbf8, 0xd755989f, 0xea285d36, 0x3a031e51,
    0x90d29a29, 0x40f9d94e, 0x7d841ce7, 0xadaf5f80,
    0x646b5917, 0xb4401a70, 0x893ddfd9, 0x59169cbe,
    0xf3c718c6, 0x23ec5ba1, 0x1e919e08, 0xcebadd6f,
    0xcfa869d6, 0x1f832ab1, 0x22feef18, 0xf2d5ac7f,
    0x58042807, 0x882f6b60, 0xb552aec9, 0x6579edae,
    0xacbdeb39, 0x7c96a85e, 0x41eb6df7, 0x91c02e90,
    0x3b11aae8, 0xeb3ae98f, 0xd6472c26, 0x066c6f41,
    0x09822045, 0xd9a96322, 0xe4d4a68b, 0x34ffe5ec,
    0x9e2e6194, 0x4e0522f3, 0x7378e75a, 0xa353a43d,
    0x6a97a2aa, 0xbabce1cd, 0x87c12464, 0x57ea6703,
    0xfd3be37b, 0x2d10a01c, 0x106d65b5, 0xc04626d2,
    0x0efcfbbd, 0xded7b8da, 0xe3aa7d73, 0x33813e14,
    0x9950ba6c, 0x497bf90b, 0x74063ca2, 0xa42d7fc5,
    0x6de97952, 0xbdc23a35, 0x80bfff9c, 0x5094bcfb,
    0xfa453883, 0x2a6e7be4, 0x1713be4d, 0xc738fd2a,
    0xc8d6b22e, 0x18fdf149, 0x258034e0, 0xf5ab7787,
    0x5f7af3ff, 0x8f51b098, 0xb22c7531, 0x62073656,
    0xabc330c1, 0x7be873a6, 0x4695b60f, 0x96bef568,
    0x3c6f7110, 0xec443277, 0xd139f7de, 0x0112b4b9,
    0xd31dd2e1, 0x03369186, 0x3e4b542f, 0xee601748,
    0x44b19330, 0x949ad057, 0xa9e715fe, 0x79cc5699,
    0xb008500e, 0x60231369, 0x5d5ed6c0, 0x8d7595a7,
    0x27a411df, 0xf78f52b8, 0xcaf29711, 0x1ad9d476,
    0x15379b72, 0xc51cd815, 0xf8611dbc, 0x284a5edb,
    0x829bdaa3, 0x52b099c4, 0x6fcd5c6d, 0xbfe61f0a,
    0x7622199d, 0xa6095afa, 0x9b749f53, 0x4b5fdc34,
    0xe18e584c, 0x31a51b2b, 0x0cd8de82, 0xdcf39de5,
    0x1249408a, 0xc26203ed, 0xff1fc644, 0x2f348523,
    0x85e5015b, 0x55ce423c, 0x68b38795, 0xb898c4f2,
    0x715cc265, 0xa1778102, 0x9c0a44ab, 0x4c2107cc,
    0xe6f083b4, 0x36dbc0d3, 0x0ba6057a, 0xdb8d461d,
    0xd4630919, 0x04484a7e, 0x39358fd7, 0xe91eccb0,
    0x43cf48c8, 0x93e40baf, 0xae99ce06, 0x7eb28d61,
    0xb7768bf6, 0x675dc891, 0x5a200d38, 0x8a0b4e5f,
    0x20daca27, 0xf0f18940, 0xcd8c4ce9, 0x1da70f8e,
    0x1cb5bb37, 0xcc9ef850, 0xf1e33df9, 0x21c87e9e,
    0x8b19fae6, 0x5b32b981, 0x664f7c28, 0xb6643f4f,
    0x7fa039d8, 0xaf8b7abf, 0x92f6bf16, 0x42ddfc71,
    0xe80c7809, 0x38273b6e, 0x055afec7, 0xd571bda0,
    0xda9ff2a4, 0x0ab4b1c3, 0x37c9746a, 0xe7e2370d,
    0x4d33b375, 0x9d18f012, 0xa06535bb, 0x704e76dc,
    0xb98a704b, 0x69a1332c, 0x54dcf685, 0x84f7b5e2,
    0x2e26319a, 0xfe0d72fd, 0xc370b754, 0x135bf433,
    0xdde1295c, 0x0dca6a3b, 0x30b7af92, 0xe09cecf5,
    0x4a4d688d, 0x9a662bea, 0xa71bee43, 0x7730ad24,
    0xbef4abb3, 0x6edfe8d4, 0x53a22d7d, 0x83896e1a,
    0x2958ea62, 0xf973a905, 0xc40e6cac, 0x14252fcb,
    0x1bcb60cf, 0xcbe023a8, 0xf69de601, 0x26b6a566,
    0x8c67211e, 0x5c4c6279, 0x6131a7d0, 0xb11ae4b7,
    0x78dee220, 0xa8f5a147, 0x958864ee, 0x45a32789,
    0xef72a3f1, 0x3f59e096, 0x0224253f, 0xd20f6658,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_is_a_permutation() {
        let mut seen = [false; 256];
        for &b in SBOX.iter() {
            assert!(!seen[b as usize]);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn qbox_entries_are_distinct() {
        for (i, a) in QBOX.iter().enumerate() {
            assert!(QBOX[i + 1..].iter().all(|b| a != b));
        }
    }

    /// Multiply in GF(2^8) modulo `x^8 + x^6 + x^3 + x^2 + 1`.
    fn gf_mul(mut a: u8, mut b: u8) -> u8 {
        let mut p = 0;
        while b != 0 {
            if b & 1 != 0 {
                p ^= a;
            }
            let carry = a & 0x80 != 0;
            a <<= 1;
            if carry {
                a ^= 0x4d;
            }
            b >>= 1;
        }
        p
    }

    #[test]
    fn multab_entries() {
        for x in 0..=255u8 {
            let expected = u32::from_be_bytes([
                gf_mul(x, 0xd0),
                gf_mul(x, 0x2b),
                gf_mul(x, 0x43),
                gf_mul(x, 0x67),
            ]);
            assert_eq!(MULTAB[x as usize], expected, "entry {:#04x}", x);
        }
    }

    #[test]
    fn multab_is_linear() {
        assert_eq!(MULTAB[0], 0);
        assert_eq!(MULTAB[1], 0xd02b_4367);
        for a in 0..256 {
            for b in [0x01, 0x02, 0x80, 0xa5, 0xff] {
                assert_eq!(MULTAB[a ^ b], MULTAB[a] ^ MULTAB[b]);
            }
        }
    }
}
