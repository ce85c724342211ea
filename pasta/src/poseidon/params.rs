//! Poseidon constant tables for the 3-lane, rate-2 instance over `Fp`.
//!
//! Every element is stored in Montgomery form.

use crate::Fp;

/// Number of lanes in the sponge state.
pub(crate) const SPONGE_WIDTH: usize = 3;

/// Number of lanes absorbed between permutations.
pub(crate) const SPONGE_RATE: usize = 2;

/// Number of full rounds.
pub(crate) const FULL_ROUNDS: usize = 53;

/// Number of round-key rows: one per full round plus the final key addition.
pub(crate) const ROUND_COUNT: usize = FULL_ROUNDS + 1;

/// Round keys, indexed by round.
pub(crate) static ROUND_KEYS: [[Fp; SPONGE_WIDTH]; ROUND_COUNT] = [
    [
        Fp::from_montgomery([
            0xa7ea_ec68_b00f_442f,
            0x6f59_e1a8_3564_3145,
            0x5e10_85dc_3969_4ee7,
            0x31f4_3b11_041c_e57e,
        ]),
        Fp::from_montgomery([
            0xaf9d_994f_e02c_ad85,
            0xd023_d4db_a242_51f2,
            0xab2b_2890_11b1_0b15,
            0x1367_03f8_461e_5900,
        ]),
        Fp::from_montgomery([
            0x17d4_dcf1_505a_5b8e,
            0x9053_01ba_46f3_5eda,
            0xbf18_3c86_1c89_0269,
            0x0cd2_255c_8e8b_fad7,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x6525_19f3_5396_e7b9,
            0xf939_da87_dd25_65f7,
            0x7786_3388_eeb1_739a,
            0x2ef0_165a_2c2e_5844,
        ]),
        Fp::from_montgomery([
            0x477f_6979_21c5_a46f,
            0x2f55_97aa_f22a_3c0e,
            0xea51_d9a2_b20e_f8ee,
            0x27f1_9ea8_0ac2_59a1,
        ]),
        Fp::from_montgomery([
            0x4752_5313_2eaf_c552,
            0x691f_153f_119e_2158,
            0x3463_b3d7_5dc7_3170,
            0x3875_a261_1a00_25e4,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xc150_0848_eb70_05a6,
            0x61e2_acd1_faf2_6ff8,
            0xf50c_6734_1380_fa2f,
            0x014e_95cd_68d6_778e,
        ]),
        Fp::from_montgomery([
            0xa82b_34ca_d0eb_d99e,
            0x771d_54af_1760_24ba,
            0xa343_788a_c43b_bde2,
            0x31c9_ab35_4d21_b72a,
        ]),
        Fp::from_montgomery([
            0x3deb_92a1_d014_0aab,
            0xb710_f83b_b2ce_1349,
            0xf3dc_159c_b917_1a97,
            0x06c3_eac6_6a23_c368,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x0d25_cd65_9b62_b584,
            0x3a52_d26b_8092_be14,
            0x0e36_c515_5d1e_135b,
            0x16de_eee5_467c_7a70,
        ]),
        Fp::from_montgomery([
            0x9b44_6f45_3cb5_0aca,
            0xeadf_51c8_f0af_7a58,
            0x75da_6f44_c4a0_4ca2,
            0x0ccc_39a8_549c_b487,
        ]),
        Fp::from_montgomery([
            0xe091_9180_1b0f_dabc,
            0xa745_2c89_066d_4bd0,
            0x5244_883d_dc1f_d9cf,
            0x3862_cc17_2ab3_7d2f,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x6a87_a992_1ce9_aabf,
            0x5d70_1ed9_a030_bc04,
            0xf996_42aa_2a83_5ec8,
            0x2831_9fcf_fc61_a144,
        ]),
        Fp::from_montgomery([
            0xafb8_a54d_87a1_5b37,
            0x31e9_3428_debe_f477,
            0xd328_f47b_4885_2d58,
            0x1e9f_b7a3_f8c8_e39f,
        ]),
        Fp::from_montgomery([
            0x0a58_f9aa_995f_cab1,
            0x5fb0_1350_4686_4286,
            0x6ad2_9275_3e09_ec37,
            0x24cb_4d2f_f2e7_7907,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xbebb_7c8e_5728_0d90,
            0x0a25_7533_1fa3_f83b,
            0x1bda_a15a_bc60_32e4,
            0x137f_4d26_f7fc_2b89,
        ]),
        Fp::from_montgomery([
            0x8ea0_4d93_f2a3_faba,
            0x76d8_3e09_7614_3e11,
            0xde45_171e_6c47_9b69,
            0x3ec5_00ad_89af_dcfe,
        ]),
        Fp::from_montgomery([
            0x9741_b7a3_9537_9855,
            0x916b_939a_142e_1e68,
            0x4fda_7749_6b81_5109,
            0x19d9_93fa_47fb_c1a7,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x31d6_e313_b491_fe95,
            0x19f0_7f1a_489c_b20a,
            0x517a_c8eb_07d9_1f83,
            0x16bd_2c0e_204b_b5dd,
        ]),
        Fp::from_montgomery([
            0x4217_0b69_4f7b_1926,
            0xdde5_94e9_f606_0540,
            0xbdb7_c66a_bef5_75a5,
            0x26c2_c710_d9ae_a3c9,
        ]),
        Fp::from_montgomery([
            0xccfb_5e56_6332_e76d,
            0x4e73_df58_8d42_3339,
            0xa4ed_e3fd_a717_8916,
            0x28fc_0255_accd_dbf0,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x2fc2_f7a5_cf4e_eb76,
            0x709a_30d9_4daa_56c0,
            0x67a5_dd9c_6965_33dc,
            0x3ace_056f_8390_07b7,
        ]),
        Fp::from_montgomery([
            0x7769_ae00_82ca_e71b,
            0xdaa4_d4c0_8c74_011a,
            0x919a_0142_3e32_424d,
            0x2246_7d42_5c99_d5c9,
        ]),
        Fp::from_montgomery([
            0x6bcd_3613_ace4_871c,
            0xb0bc_2175_3106_9def,
            0x5534_8199_fa2b_487b,
            0x2385_b602_228e_77ee,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x7022_e341_79f7_fd32,
            0xd7d1_22a3_a918_38e2,
            0x20e0_714f_4174_1103,
            0x055c_a302_03c3_5d65,
        ]),
        Fp::from_montgomery([
            0xeac6_4a4e_27a5_32ac,
            0xfad7_1766_9ae0_9d08,
            0x1608_8f7d_30d7_24f1,
            0x37bb_5a0c_062e_6400,
        ]),
        Fp::from_montgomery([
            0x7c34_a314_bcba_4635,
            0x0bfd_d1e4_cda8_ce53,
            0x7b98_09bd_9828_ebbb,
            0x0be1_7455_fb91_5f02,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x3eed_f4d1_4391_04cc,
            0x6944_849f_8d44_d187,
            0x4dbe_80e8_f415_dfdc,
            0x1df9_173c_6d04_7e75,
        ]),
        Fp::from_montgomery([
            0xbe0b_090e_4607_6c2e,
            0xdc96_4a58_25b4_9df4,
            0xc8c6_9000_8b31_f4cc,
            0x2a7e_ea60_cbe9_e9c2,
        ]),
        Fp::from_montgomery([
            0x7e3e_a7d6_debb_93ed,
            0x6978_18af_ff9c_8ff8,
            0xbd71_6ed0_d057_327c,
            0x0b4a_53cd_8838_ca03,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x9249_5707_85f5_95ac,
            0xa8ba_edef_d054_d755,
            0x4e34_9f30_983c_b2d1,
            0x20e0_38ae_5219_f06f,
        ]),
        Fp::from_montgomery([
            0x1e6b_0d84_b6b0_bd2b,
            0x2803_6e39_9a18_2d83,
            0x9b4d_b5cd_c8f5_900f,
            0x000b_a7d8_43e4_0009,
        ]),
        Fp::from_montgomery([
            0xc186_2aa7_68e1_a9de,
            0x134e_e89e_a258_d84b,
            0xa344_c6a9_8af5_c8e1,
            0x3586_8f24_584f_89c0,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x6562_561d_6d2b_d2eb,
            0xe906_eab7_bfb2_5ce1,
            0xdc32_8636_0790_ca24,
            0x095c_f986_4fa2_e99f,
        ]),
        Fp::from_montgomery([
            0x8df0_4360_bfee_0f49,
            0xf36d_a4b0_797f_28ab,
            0x973b_5df0_87ce_6868,
            0x31b4_ebf5_790f_547a,
        ]),
        Fp::from_montgomery([
            0x5236_c690_70d6_a6cd,
            0xe348_3908_bed7_cd3a,
            0x230c_f521_e8f6_36d5,
            0x1369_fed0_b1eb_dd4e,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x6b84_b4d8_a249_ce56,
            0xf8f9_e37a_ee88_a381,
            0x547e_20f3_9ea3_ee67,
            0x1a52_1535_f4c4_609a,
        ]),
        Fp::from_montgomery([
            0xece3_e35b_95cf_0b40,
            0xc3f3_55a2_343a_9bba,
            0x0352_dca2_83e1_dc20,
            0x1853_3c49_5c15_9ea5,
        ]),
        Fp::from_montgomery([
            0x5c08_0eb0_e667_f655,
            0xae7e_edb8_4aaa_82cf,
            0xc408_00ef_bbfb_36e2,
            0x23f8_f08e_412d_848e,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xe47d_e2b6_6681_6c07,
            0xfd08_4e96_b59c_227a,
            0xffee_4cb4_adef_b5b9,
            0x2787_3596_008b_f329,
        ]),
        Fp::from_montgomery([
            0x74c0_7063_640d_932f,
            0xdcaf_a7d1_6923_f8c6,
            0x69cc_6076_97b5_fa58,
            0x3fe8_dcd3_50f1_58a0,
        ]),
        Fp::from_montgomery([
            0x4685_e7e0_534a_4487,
            0x3e0a_5a82_c130_8413,
            0xe8f4_8825_0074_5f38,
            0x15d7_152e_439e_3e39,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x1b6a_574d_8750_bc73,
            0x106e_ecce_46ab_f1e6,
            0xaac2_6d11_ddaa_2fa6,
            0x38e3_1bc0_f50b_77a8,
        ]),
        Fp::from_montgomery([
            0x46f4_e9b5_d03c_c39d,
            0xcc3f_83cb_ed37_6830,
            0x9b08_a2cd_1eb3_c25c,
            0x1b20_5334_b295_8429,
        ]),
        Fp::from_montgomery([
            0xd58f_58d5_f121_9de9,
            0x1cfa_a754_7a26_2198,
            0xcded_38f3_7a2a_880d,
            0x1773_92b2_1a89_8be2,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xabc2_d6ca_f40f_da5a,
            0xeb35_0f69_7f26_ad45,
            0x3a89_4514_2b94_4356,
            0x0646_f6d1_5a42_f200,
        ]),
        Fp::from_montgomery([
            0xff43_256a_693e_8ab0,
            0x2d30_5df7_c836_dcae,
            0x0ccd_e78b_d165_aba3,
            0x0784_cf8c_1e09_fd03,
        ]),
        Fp::from_montgomery([
            0x11c0_a75d_fb1d_6922,
            0xa7dc_5f89_0e8b_9385,
            0xaf78_4b2e_c075_8e11,
            0x0b79_376b_50d4_0562,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x4cfa_43b9_3f23_9b43,
            0x8465_e626_5d89_8268,
            0x1288_bcdb_6fff_50f4,
            0x0819_462a_f6ba_8c78,
        ]),
        Fp::from_montgomery([
            0xba07_b8ff_dba3_28b0,
            0x4215_ac49_2cce_28b3,
            0x9730_ec3e_2f21_88f3,
            0x10bc_9871_d300_4f71,
        ]),
        Fp::from_montgomery([
            0x5a31_626c_aca7_283f,
            0x4042_4e69_4cc6_3e9a,
            0xcceb_1adc_2a52_c6b9,
            0x2836_d9e7_ccb5_b686,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xf219_1ab8_935e_3139,
            0x6263_e421_4388_39a9,
            0xf36d_5611_a925_964c,
            0x03ad_2549_81c5_584f,
        ]),
        Fp::from_montgomery([
            0x77f3_cbe4_b7ec_0506,
            0x14cf_d27c_ad91_e7f6,
            0xd663_82bc_65d3_0343,
            0x11eb_1499_a7eb_9296,
        ]),
        Fp::from_montgomery([
            0x8306_372b_9fcc_fce6,
            0xff3f_90b3_8921_4f3f,
            0x5898_3715_0e5e_7261,
            0x3306_7358_4db8_84bd,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xbf43_8550_dc08_ca8c,
            0xa67d_5b92_e6b2_d9f4,
            0x45f1_b485_1f11_355e,
            0x3197_0897_5620_9bf0,
        ]),
        Fp::from_montgomery([
            0xa7bb_2e56_a338_3876,
            0xa1b8_5198_d1a9_92d9,
            0x807a_2bb7_e343_27c6,
            0x1a7b_e86e_bc9c_eb25,
        ]),
        Fp::from_montgomery([
            0xb67d_b6d3_3a48_b0df,
            0x20bc_ebe6_769f_cc54,
            0x2c5d_efeb_f8a1_07df,
            0x3c0e_7559_7f21_e444,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x3ee0_9fdb_fc39_69f8,
            0xfa1d_3b39_ae85_2fe9,
            0xf9a7_5fb2_75dc_4bf3,
            0x2a38_ad56_c662_e4c3,
        ]),
        Fp::from_montgomery([
            0x4361_1172_4d96_7633,
            0x7bc3_452a_e208_f145,
            0xfa8b_9c79_a56e_7177,
            0x3328_b53b_61a9_6c1a,
        ]),
        Fp::from_montgomery([
            0x7dc6_8504_1c4a_8de8,
            0xcc8d_3bf1_000d_5962,
            0x53f0_f1b8_456b_9659,
            0x0e56_33a4_ee33_b43f,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x50e4_8fb7_2f31_229f,
            0xa5b7_53a3_3555_53ad,
            0x1c81_ccd6_82c6_dbf0,
            0x06c7_95d3_32f9_4020,
        ]),
        Fp::from_montgomery([
            0xf0fd_bce2_5dad_3d31,
            0x9c58_8e12_8b3c_ebf0,
            0x2787_67ba_d1a4_01ec,
            0x12fd_7107_dacf_168b,
        ]),
        Fp::from_montgomery([
            0x98f2_0045_5814_ae5c,
            0x47f8_009a_5ae4_45bd,
            0x4873_93e3_ebc8_077f,
            0x3d57_9e85_ebce_0cba,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xe8df_7114_46a2_a238,
            0xde4c_c56b_9510_c04c,
            0xb699_91b6_6d09_6631,
            0x1ab9_62f4_74f3_1f94,
        ]),
        Fp::from_montgomery([
            0x9943_9707_6df0_0b58,
            0x655b_22de_2fc1_d376,
            0x8c41_52fc_acaf_0b18,
            0x2005_1bcd_8c1c_3f37,
        ]),
        Fp::from_montgomery([
            0xd66f_e84e_8d8d_5bcb,
            0x0ba0_22f5_4bb7_3200,
            0xdaf1_7b9a_d85c_1d89,
            0x0d93_9c08_5418_afd2,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x00d5_e63b_74c2_11bc,
            0xb12f_c9c1_def2_e171,
            0x44ea_f0fd_6faa_d3ea,
            0x242c_8eaf_5e3f_8025,
        ]),
        Fp::from_montgomery([
            0xbf97_7060_88f0_ff2e,
            0x1d8d_ad8a_6575_0bd0,
            0xc29b_958d_06fc_399f,
            0x134e_8175_7cb8_421e,
        ]),
        Fp::from_montgomery([
            0x090b_e439_afe7_faf2,
            0xc4b4_762c_8cc1_6bea,
            0x1e47_7be4_c4f4_0c9b,
            0x23b4_d50d_c7ec_40d7,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x333f_64eb_f7d2_e7a8,
            0x870b_1f5d_bdb1_1bdf,
            0x74c9_542d_d65f_4221,
            0x128b_b297_ac5b_8087,
        ]),
        Fp::from_montgomery([
            0x74cd_c264_c1c3_2632,
            0xcdbd_7f06_78ca_09f9,
            0xeb37_8a38_bded_711e,
            0x1c4c_18ce_d367_bb10,
        ]),
        Fp::from_montgomery([
            0x436c_f961_4563_30a9,
            0x5261_fdb1_0401_ba02,
            0x5aa0_7cfe_8724_969b,
            0x17d4_aa22_d753_9f30,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x2257_7a30_4a9a_99c0,
            0x2699_0766_bcee_af3e,
            0xf44a_18d2_965b_75e6,
            0x2b9c_cb51_1447_556b,
        ]),
        Fp::from_montgomery([
            0xb481_6bee_4c57_ea14,
            0x657c_7ff2_2284_eddf,
            0x0803_27f4_b561_a57a,
            0x185d_288b_2163_e408,
        ]),
        Fp::from_montgomery([
            0x2521_ae71_bb3e_92cd,
            0xcfa6_a390_8f94_22a4,
            0xc556_6b5d_0cba_3b6a,
            0x1918_6ee3_4b32_adf1,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x6aba_be0d_83a1_4804,
            0x48a2_9766_13fe_9c87,
            0x8fd2_8b1e_6637_a35f,
            0x036b_e57a_5b7d_c101,
        ]),
        Fp::from_montgomery([
            0x9409_b310_f8de_dbd5,
            0xdcb6_ff2d_d7ad_e6e8,
            0x58ef_424b_fb1e_96cf,
            0x059c_25a9_e843_5caa,
        ]),
        Fp::from_montgomery([
            0x6017_3368_6571_8144,
            0x3b73_5147_994d_3174,
            0x556d_acb8_916c_e5fb,
            0x06db_68d0_40cf_3894,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xfb28_daa5_48ea_e196,
            0xdee9_f1fb_48ad_3a18,
            0x8aeb_7ea7_4f74_58e0,
            0x2f9a_904f_8eca_76f4,
        ]),
        Fp::from_montgomery([
            0x78ab_93c5_3d27_c0a9,
            0x7cbd_38a1_9659_d91e,
            0x6190_fc4c_6fce_a287,
            0x3924_93ff_ebdc_f4db,
        ]),
        Fp::from_montgomery([
            0xc288_a18b_e7c7_b29a,
            0x2936_3549_5be4_702a,
            0x8eab_eaa0_50c4_e742,
            0x3ee2_0e43_c9a7_e3a9,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xb247_c20b_ce94_d2fb,
            0x7b37_f102_aba6_dc41,
            0x4e4c_d6f2_dfd0_6908,
            0x2a4b_7450_c10e_8656,
        ]),
        Fp::from_montgomery([
            0xb853_0701_f119_0812,
            0x8852_c8a7_dd78_c157,
            0xef99_6128_48a0_9ee6,
            0x18ca_c723_0141_9e17,
        ]),
        Fp::from_montgomery([
            0x3bf7_2719_6961_25f9,
            0xa915_3cf6_b92e_d66c,
            0x5dee_1004_fa68_e8ad,
            0x2b0a_b9d9_c714_6b8d,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x536e_86c6_4463_2835,
            0xfb52_8949_c3d1_0378,
            0x93ce_f66e_e69c_c174,
            0x0ef7_cc63_c029_b540,
        ]),
        Fp::from_montgomery([
            0x3f71_db10_b88e_45e1,
            0x6a1c_dfba_155d_75ba,
            0x03ae_6893_f9c0_0830,
            0x1f4a_a1ed_aeea_25af,
        ]),
        Fp::from_montgomery([
            0x6c91_1d68_b8ba_e9c7,
            0xb562_eb91_32f9_adcf,
            0xb995_52ef_d292_2e09,
            0x1aee_619f_6e53_e5d1,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xc3e7_eba5_38b5_7ce4,
            0xe31f_c856_b301_a0ed,
            0x907b_ed9f_d07a_7f39,
            0x2d8b_1561_82ef_e6c2,
        ]),
        Fp::from_montgomery([
            0x3c46_848a_7286_379b,
            0x8c1c_e4ab_f2bd_ac01,
            0xfe59_adad_fa57_ab2d,
            0x118d_842d_f28b_a098,
        ]),
        Fp::from_montgomery([
            0x4034_6673_db34_7d50,
            0x9e9e_286f_bc22_1bac,
            0x629f_295d_0d56_a062,
            0x2c74_73af_62ed_3627,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x752c_0e54_b908_4c5e,
            0x9876_503d_f351_23f2,
            0x4033_dd4b_36b3_02eb,
            0x1f2f_3ed1_fdf6_db7b,
        ]),
        Fp::from_montgomery([
            0xc1aa_c289_2f6a_d5a0,
            0xa4d2_c62a_1246_0d75,
            0xfdfc_2728_0cba_16d8,
            0x32e7_b499_b5af_a89f,
        ]),
        Fp::from_montgomery([
            0x0a93_b9c7_2120_5117,
            0x29f3_2892_dd66_377a,
            0x5db3_4e58_4466_59b5,
            0x35b9_a957_235c_e56c,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x27dd_8772_ea8d_d6fb,
            0x7657_5808_9337_7a80,
            0x9811_6540_d5d7_34fc,
            0x1784_ef3d_beda_a7f1,
        ]),
        Fp::from_montgomery([
            0x7ea4_b445_3558_ad1e,
            0xe79a_e8a8_4479_841f,
            0x1448_d360_ba9d_ceaf,
            0x0290_04bf_2b27_c1cc,
        ]),
        Fp::from_montgomery([
            0x09be_743f_9cac_cf63,
            0xf852_240a_936f_7e9e,
            0xb1cd_6029_e138_42dd,
            0x255b_dfce_8905_f3d5,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x7415_ee9f_6763_1e70,
            0x5455_53ff_af7d_2592,
            0xde51_ae91_94c9_a7b2,
            0x3044_09b1_76b5_751d,
        ]),
        Fp::from_montgomery([
            0x9c44_7ba5_504d_7b34,
            0xfb28_8ee7_3506_db89,
            0x4cb3_2cef_bc23_5f79,
            0x3f20_84c1_c160_5185,
        ]),
        Fp::from_montgomery([
            0xdd24_1097_30f8_173c,
            0x58b0_0f31_6d07_a773,
            0x1e86_bdb1_9d12_1999,
            0x3c46_e8c0_4c88_a74f,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x09ff_193f_3361_0856,
            0x7cff_32dc_29fa_fc7f,
            0xab11_7676_4a90_b2b5,
            0x37a3_14e9_261a_12bc,
        ]),
        Fp::from_montgomery([
            0xea67_53fd_cff0_9509,
            0x4222_dd5e_1a66_381d,
            0x6056_412c_14d4_667e,
            0x30f1_9d01_4177_6609,
        ]),
        Fp::from_montgomery([
            0x383a_756c_dd6b_bf4a,
            0x4b31_4310_043c_1039,
            0x7aa6_b018_a79a_d7a4,
            0x2d78_d629_18aa_8e15,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x2c20_2faf_d61e_9da3,
            0x89be_41af_c9c1_f1fe,
            0x015b_6d71_8ea7_4a2d,
            0x1c1c_7eb8_4e51_0588,
        ]),
        Fp::from_montgomery([
            0x342b_bc73_54bd_e7a5,
            0xc995_adfb_e200_5f6b,
            0x85a6_18fb_e9cc_ea3c,
            0x3d61_c031_32b8_31b7,
        ]),
        Fp::from_montgomery([
            0x84f0_053a_596c_462a,
            0x0372_5a51_2ef2_e7da,
            0x9866_bda3_e8d6_5025,
            0x1630_7f53_c31b_9b2d,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xe11a_11d7_ad7c_2941,
            0xa196_efe5_3885_dac4,
            0x401c_98e5_702a_4b4d,
            0x2627_aedf_841d_2535,
        ]),
        Fp::from_montgomery([
            0x06c1_3731_5f42_a3d7,
            0x1b27_880c_4b80_acc2,
            0xd246_3e7a_f19c_63f8,
            0x1ac3_61c3_ae93_60d0,
        ]),
        Fp::from_montgomery([
            0x9ca7_acb3_c1e8_764c,
            0xa3ab_f950_02b6_3ec7,
            0x0607_aec3_d669_27bd,
            0x3503_22d1_35e4_b5b0,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x8767_a56f_5882_3fb1,
            0xa171_15bf_3357_77f7,
            0x02d2_d011_c09b_c4b6,
            0x23f5_c30c_8bec_1802,
        ]),
        Fp::from_montgomery([
            0x469e_5aee_1e35_4cff,
            0x19b6_62c5_ee65_9a15,
            0x8222_b7d8_1ef2_e3d0,
            0x25db_e21f_1dc1_4bbb,
        ]),
        Fp::from_montgomery([
            0xcf30_36e9_bef5_1413,
            0x2ec5_9701_1f15_b75d,
            0x1b6f_15cf_4198_7ffb,
            0x243e_4331_eaa8_ca3f,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x7e12_d726_4aa9_d64a,
            0x9868_6624_9a40_df19,
            0x224d_9731_f988_d510,
            0x03da_1029_b04d_0699,
        ]),
        Fp::from_montgomery([
            0x63ce_9c82_f26c_2122,
            0xd07b_4273_7417_e607,
            0xdffe_6c18_b3e3_2c4e,
            0x0cb5_58a5_5e33_635b,
        ]),
        Fp::from_montgomery([
            0xa9e7_2e1b_bb1e_1ac6,
            0x07c0_eac4_90aa_84fe,
            0xc716_b352_d91e_f297,
            0x17c0_df06_2139_a3b0,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xb6e0_e5ac_afd7_5f1b,
            0xe79c_cc9d_178b_e022,
            0x0a62_fb84_a459_4821,
            0x118f_f23c_ec0e_9ab7,
        ]),
        Fp::from_montgomery([
            0xdaeb_6bb9_649c_c9ed,
            0x2b1c_328f_5bb8_662f,
            0x5512_487e_f834_c9ff,
            0x10a6_d8b7_60d8_381f,
        ]),
        Fp::from_montgomery([
            0x55bc_d8a0_9256_61ee,
            0x9228_9bf6_cb46_afe5,
            0xa2b1_c386_3037_4b57,
            0x1a38_2c83_ffa7_d479,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x5b9e_d41d_83b2_2227,
            0x861a_12cf_34e2_0309,
            0x7221_87ec_c9fb_01cd,
            0x3d7b_b8d8_fbbf_19aa,
        ]),
        Fp::from_montgomery([
            0x56b2_351c_aaa7_7660,
            0x5649_f8af_b77f_8250,
            0x179b_134b_efc4_0c2a,
            0x117b_5ac7_fab8_a73b,
        ]),
        Fp::from_montgomery([
            0xbb53_d76e_fa39_fb63,
            0x3821_ad8a_b664_8b10,
            0x0860_e686_568c_98df,
            0x1815_1003_9e8b_f016,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x0abc_ab07_505b_93cf,
            0x4088_c208_ddc3_8a79,
            0x60aa_91fc_f3d3_0a95,
            0x1cca_89ba_5088_7f72,
        ]),
        Fp::from_montgomery([
            0x756e_a77a_c464_fb2f,
            0xb54a_e17c_6bba_044a,
            0x3350_ae0d_f3e9_0873,
            0x186b_9034_baed_ae26,
        ]),
        Fp::from_montgomery([
            0x813c_c8de_3ccd_6501,
            0x612b_ffa9_3d75_79f9,
            0x5ad4_2ea9_bc5b_bd6c,
            0x123e_d625_db16_7d32,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x2db3_4a3c_43a0_1e76,
            0x93bf_90bd_3991_9618,
            0xb62a_afc5_a062_e6ec,
            0x30e3_3d44_bc28_51c0,
        ]),
        Fp::from_montgomery([
            0x74dc_d4e0_7d98_a23b,
            0xb390_d88c_e8c1_c12d,
            0xc60d_4855_592f_4f12,
            0x3d38_08ea_888b_c3ef,
        ]),
        Fp::from_montgomery([
            0x6b61_2513_2d3b_6c9b,
            0xefb9_3b37_d8c9_8901,
            0x5396_ab98_79f0_61f3,
            0x2681_4970_d99a_4859,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x65a3_9dff_4c09_3ac6,
            0xdb8b_0374_1b7d_38b3,
            0x34e5_285e_b273_2099,
            0x00cf_fcab_13b9_c402,
        ]),
        Fp::from_montgomery([
            0xba15_1ecf_346e_77e5,
            0xdc94_4d4c_edf2_1de6,
            0xbf61_57bd_c8bf_2df3,
            0x39a7_2698_6b4d_3042,
        ]),
        Fp::from_montgomery([
            0x4415_0981_f7bb_214f,
            0xdaf8_2667_aa9d_f080,
            0x4cb0_e425_1cbd_837c,
            0x0964_07a7_f4c8_919d,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xab32_7a18_74a4_376d,
            0x02ac_8b21_5b83_ec21,
            0x72cc_c131_0e75_6e19,
            0x337f_6415_8d29_681d,
        ]),
        Fp::from_montgomery([
            0xfdd5_47b1_2cd1_c47c,
            0xeda5_70d7_7efb_35ef,
            0xee67_3a9c_5c5c_6c24,
            0x1069_938e_1c2d_5fb8,
        ]),
        Fp::from_montgomery([
            0xe18e_30b7_2b41_cebd,
            0x9530_ddc3_5a81_e36e,
            0xcb07_6c03_72dd_1f10,
            0x1a68_10a2_f1ae_e9a3,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xf42b_4184_e45e_f9b0,
            0x621c_9c9f_4b78_05bb,
            0xe64a_4966_c57c_625e,
            0x331d_faac_4fca_1afe,
        ]),
        Fp::from_montgomery([
            0x0574_5585_e5aa_8e18,
            0x4813_8c50_0616_daa7,
            0x7408_80dd_14d5_7c7b,
            0x0621_e423_7f79_bc67,
        ]),
        Fp::from_montgomery([
            0x7752_004d_293d_5b5d,
            0x3217_6da9_5d73_7cf5,
            0xe14b_b9ef_4281_cf03,
            0x056e_6796_88de_c9b0,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xcf96_c57a_6c6d_ced2,
            0x9d06_4100_8bc1_e8e6,
            0xaf7c_8a61_f00a_ea43,
            0x3de7_cc92_1f00_6f35,
        ]),
        Fp::from_montgomery([
            0xe5a2_8427_4906_c87c,
            0x3f57_a5c2_27ad_9ef7,
            0x8ca3_d4e1_09a7_01b9,
            0x023f_a54f_a071_7813,
        ]),
        Fp::from_montgomery([
            0xa418_bb28_3bcf_6e4c,
            0xfe20_37c5_295b_505d,
            0xcaa0_956e_946f_4a29,
            0x2a04_2a0c_c94e_6eb7,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xd8df_1477_8b79_5fec,
            0x16c2_7f66_4e2e_a362,
            0xe24b_2f6e_dd5e_aebe,
            0x14c9_03e1_8d6d_1fc3,
        ]),
        Fp::from_montgomery([
            0x8958_6ac5_b445_0805,
            0xadc6_ee91_f14a_e921,
            0xc6bc_4c3b_0f87_3a03,
            0x351f_ccf4_9d14_543a,
        ]),
        Fp::from_montgomery([
            0xd360_1422_d37a_aa9e,
            0x988c_2030_77dd_68e9,
            0x1cae_7a1d_3150_e958,
            0x1292_d114_37a1_acd4,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x0e53_e955_d71e_fa6c,
            0x08fe_1b41_936d_8c2e,
            0xc111_5be6_7967_00ba,
            0x16f2_5774_44f3_33ac,
        ]),
        Fp::from_montgomery([
            0xb46f_dc6c_76b9_1715,
            0xba7c_9874_8d26_f41a,
            0x8a76_7b73_1b64_d9a2,
            0x380f_78e2_7ff8_9d8f,
        ]),
        Fp::from_montgomery([
            0xfd99_76c4_488e_5f16,
            0xbeaf_3cb1_cf0c_fc03,
            0xf2bc_0288_3a33_9b2a,
            0x3a66_9a9f_ec53_277f,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x7489_c564_8c85_dee1,
            0x7f9d_020b_d71f_0bc3,
            0xcf34_7020_818f_d255,
            0x34ce_3d28_73ef_623b,
        ]),
        Fp::from_montgomery([
            0x8289_1abb_666f_3ff4,
            0x370d_1349_2155_070d,
            0x26c0_4260_48d9_9ec2,
            0x0089_ccee_f0d9_56cc,
        ]),
        Fp::from_montgomery([
            0xf161_875b_3c92_1a95,
            0xe0ee_4bd7_518d_961a,
            0xcd36_14b6_acaf_6d93,
            0x27ef_7c72_3667_b755,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x013f_b2dc_f933_fd4d,
            0x103f_7deb_9f64_a5aa,
            0x26d3_7531_4a7a_8189,
            0x1fb4_33f9_d0d1_a1af,
        ]),
        Fp::from_montgomery([
            0xa49a_8d25_83ef_3bdd,
            0x9a7a_627e_a241_7df1,
            0x9327_7db6_c129_8ce4,
            0x224e_fdd2_2b53_fe03,
        ]),
        Fp::from_montgomery([
            0xd9ef_2ab6_918b_48ed,
            0xab7f_9a26_7054_88c0,
            0xc179_467a_2256_5381,
            0x3c81_92ac_f265_9bbf,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x90c3_c016_8574_1695,
            0x8fc7_d42c_bdf6_2efb,
            0x8ca7_4bde_bec3_a42b,
            0x2d07_1921_3543_6805,
        ]),
        Fp::from_montgomery([
            0x0597_f912_3251_0722,
            0xb6ff_30a1_505c_4ea8,
            0xdd22_fd45_6a94_2afe,
            0x1cb7_fdcf_aa9b_dd05,
        ]),
        Fp::from_montgomery([
            0xdcf5_2038_4f1d_daf0,
            0xeb0e_e12c_3395_3a63,
            0x9a3a_10c7_e3aa_6f41,
            0x1471_506d_f8d9_86b4,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xcd60_5e27_91e6_a5e5,
            0x1c27_ce94_b83f_068f,
            0xb172_e53c_549a_3c12,
            0x21f2_64ce_80ee_f855,
        ]),
        Fp::from_montgomery([
            0xfe4a_5caf_09cd_178f,
            0xd76b_6393_a8b8_597f,
            0x828a_3130_9599_f1fa,
            0x1d7e_b56c_a9c9_20f6,
        ]),
        Fp::from_montgomery([
            0x589b_dbc5_eb3c_c1fc,
            0xa5ab_6823_129a_3ed3,
            0x1f5b_9bd5_aca5_d3ec,
            0x064a_ae35_f2e4_b6bc,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x0365_002f_7523_0793,
            0x2b8d_834b_d6a4_c78f,
            0x7f44_5a46_d203_a93d,
            0x265c_5792_46ab_3106,
        ]),
        Fp::from_montgomery([
            0x4983_fb4d_b3ca_5acd,
            0x770c_0765_4eee_faab,
            0x5445_6b57_fa1f_d5af,
            0x0b92_cdbc_f718_c353,
        ]),
        Fp::from_montgomery([
            0x01ac_57ac_76f9_28fe,
            0x0816_c4d5_2b67_0680,
            0x39b8_598c_ba83_c07d,
            0x29af_1b8a_7d9e_d796,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x715e_b17f_6f71_404f,
            0xd081_dca0_cad0_1695,
            0xdeef_df16_929d_4947,
            0x3d7f_7671_98a2_e29b,
        ]),
        Fp::from_montgomery([
            0xebfb_13fe_b020_5761,
            0x73e0_14ef_38a3_d8cb,
            0x113b_d31d_16c1_6db7,
            0x288e_acb7_eaa4_d63c,
        ]),
        Fp::from_montgomery([
            0x5d22_751f_1f2c_937d,
            0x50cc_3086_7fe0_4f68,
            0x7091_7ec4_15d4_ac2c,
            0x058c_8b7c_2b87_e78b,
        ]),
    ],
];

/// Maximum distance separable matrix, row major.
pub(crate) static MDS: [[Fp; SPONGE_WIDTH]; SPONGE_WIDTH] = [
    [
        Fp::from_montgomery([
            0x19eb_b073_3ab6_08d5,
            0xba29_ddd0_56f8_255c,
            0x90b2_6832_e301_952d,
            0x0d39_3e38_c7a5_d0ab,
        ]),
        Fp::from_montgomery([
            0x1370_915e_16c9_4656,
            0xa9d4_f14b_bd2e_a831,
            0xbe62_9fe9_3a27_e612,
            0x2157_1a7c_c32e_18af,
        ]),
        Fp::from_montgomery([
            0xb34a_71b4_f799_ea19,
            0x9685_2751_73ff_9b6b,
            0xc2aa_354b_7f11_d698,
            0x1569_1c24_c0a9_f088,
        ]),
    ],
    [
        Fp::from_montgomery([
            0xae93_2a9d_486a_face,
            0xbef0_293e_7653_db35,
            0x2794_08c4_d244_c0d1,
            0x39dd_8040_ea0c_8d80,
        ]),
        Fp::from_montgomery([
            0x9d32_fbdb_af9b_be27,
            0x999e_1c51_6880_6efa,
            0x7d5f_270b_3cb0_77a8,
            0x0b4a_c073_8805_f8de,
        ]),
        Fp::from_montgomery([
            0xcfc1_e61e_0bcf_9d5f,
            0x0123_46d0_d475_76a9,
            0x0dbd_1b0d_a710_c7b5,
            0x1db4_8905_ceec_c479,
        ]),
    ],
    [
        Fp::from_montgomery([
            0x089d_de65_da2c_627b,
            0x8735_34c4_aaf1_243a,
            0xa4f7_6bf3_e5b6_26c5,
            0x22a7_5f7c_d3ca_d9d3,
        ]),
        Fp::from_montgomery([
            0xb58e_a565_5736_1c3b,
            0xd6cb_b2cb_0bc9_9acb,
            0x5fee_1fb5_b71b_86dd,
            0x11d8_7bbc_a8e2_0fbe,
        ]),
        Fp::from_montgomery([
            0x1d51_1fe6_38ba_a5c8,
            0x7b6c_7932_776e_1032,
            0x45b2_7ee0_7053_1360,
            0x019e_b7c9_02ac_90c5,
        ]),
    ],
];

/// Sponge state after absorbing the testnet signature prefix into a zero state.
pub(crate) const TESTNET_IV: [Fp; SPONGE_WIDTH] = [
    Fp::from_montgomery([
        0x80e6_e0f1_7787_5ac7,
        0x6ea0_eac1_a34d_9dbc,
        0x9666_dfd3_d0e8_6a64,
        0x0645_9bb9_543a_1325,
    ]),
    Fp::from_montgomery([
        0xda6d_4a9e_3058_3a84,
        0xd832_ca32_84e5_11ee,
        0x664c_b08f_a607_e976,
        0x1ee6_d0e2_d61b_366c,
    ]),
    Fp::from_montgomery([
        0xda10_2c35_ead5_05ef,
        0x304f_a901_d91b_aec5,
        0x499b_1149_1dcd_5f02,
        0x35b3_3af7_4d90_13a4,
    ]),
];

/// Sponge state after absorbing the mainnet signature prefix into a zero state.
pub(crate) const MAINNET_IV: [Fp; SPONGE_WIDTH] = [
    Fp::from_montgomery([
        0x6ede_5618_5a74_fb19,
        0x32b3_d6e7_c026_97b4,
        0x496e_2f77_eb84_03b1,
        0x3c76_c4b3_42c8_9d0d,
    ]),
    Fp::from_montgomery([
        0x4dc9_45c8_f544_a7ba,
        0xffa8_1abe_a51c_c2a6,
        0xdd0f_f33d_e693_8949,
        0x3737_f9e3_054a_e727,
    ]),
    Fp::from_montgomery([
        0xff7c_7436_8142_1076,
        0xea66_10ee_d5f6_358a,
        0xb912_6a81_4275_e05d,
        0x092f_a566_b74d_41e1,
    ]),
];
