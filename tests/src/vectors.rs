//! Known-answer vectors
//!
//! ECB, CBC-NoPadding and CTR entries are from NIST SP 800-38A (F.1.1,
//! F.2.1, F.2.5, F.5.1). The CBC-PKCS5Padding entries cover plaintexts on
//! and off the block boundary.

/// A single-message vector, all fields hex encoded
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    pub key: &'static str,
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

pub const NIST_KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
pub const NIST_KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

/// SP 800-38A block chain; each IV is the previous ciphertext block
pub const CBC_NOPADDING_128: [Vector; 4] = [
    Vector {
        key: NIST_KEY_128,
        iv: "000102030405060708090a0b0c0d0e0f",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "7649abac8119b246cee98e9b12e9197d",
    },
    Vector {
        key: NIST_KEY_128,
        iv: "7649ABAC8119B246CEE98E9B12E9197D",
        plaintext: "ae2d8a571e03ac9c9eb76fac45af8e51",
        ciphertext: "5086cb9b507219ee95db113a917678b2",
    },
    Vector {
        key: NIST_KEY_128,
        iv: "5086CB9B507219EE95DB113A917678B2",
        plaintext: "30c81c46a35ce411e5fbc1191a0a52ef",
        ciphertext: "73bed6b8e3c1743b7116e69e22229516",
    },
    Vector {
        key: NIST_KEY_128,
        iv: "73BED6B8E3C1743B7116E69E22229516",
        plaintext: "f69f2445df4f9b17ad2b417be66c3710",
        ciphertext: "3ff1caa1681fac09120eca307586e1a7",
    },
];

pub const CBC_NOPADDING_256: [Vector; 4] = [
    Vector {
        key: NIST_KEY_256,
        iv: "000102030405060708090a0b0c0d0e0f",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
    },
    Vector {
        key: NIST_KEY_256,
        iv: "F58C4C04D6E5F1BA779EABFB5F7BFBD6",
        plaintext: "ae2d8a571e03ac9c9eb76fac45af8e51",
        ciphertext: "9cfc4e967edb808d679f777bc6702c7d",
    },
    Vector {
        key: NIST_KEY_256,
        iv: "9CFC4E967EDB808D679F777BC6702C7D",
        plaintext: "30c81c46a35ce411e5fbc1191a0a52ef",
        ciphertext: "39f23369a9d9bacfa530e26304231461",
    },
    Vector {
        key: NIST_KEY_256,
        iv: "39F23369A9D9BACFA530E26304231461",
        plaintext: "f69f2445df4f9b17ad2b417be66c3710",
        ciphertext: "b2eb05e2c39be9fcda6c19078c6a9d1b",
    },
];

pub const CBC_PKCS5: [Vector; 7] = [
    Vector {
        key: "ac5800ac3cb59c7c14f36019e43b44fe",
        iv: "f013ce1ec901b5b60a85a986b3b72eba",
        plaintext: "f6cee5ff28fd",
        ciphertext: "e8a846fd9718507371604504d4ca1ac7",
    },
    Vector {
        key: "24c4328aeffc0ca354a3215a3da23a38",
        iv: "c43c6269bb8c1dbba3bc22b7ba7e24b1",
        plaintext: "76cdfdf52a9753",
        ciphertext: "009e935f3fe4d57b57fc3127a8873d8c",
    },
    Vector {
        key: "4035227440a779dbd1ed75c6ae78cef5",
        iv: "8faff161a5ec06e051066a571d1729d9",
        plaintext: "b103c928531d8875",
        ciphertext: "b3d8df2c3147b0752a7e6bbbcc9d5758",
    },
    Vector {
        key: "0784fa652e733cb699f250b0df2c4b41",
        iv: "106519760fb3ef97e1ccea073b27122d",
        plaintext: "6842455a2992c2e5193056a5524075",
        ciphertext: "56a8e0c3ee3315f913693c0ca781e917",
    },
    Vector {
        key: "04952c3fcf497a4d449c41e8730c5d9a",
        iv: "53549bf7d5553b727458c1abaf0ba167",
        plaintext: "c9a44f6f75e98ddbca7332167f5c45e3",
        ciphertext: "7fa290322ca7a1a04b61a1147ff20fe66fde58510a1d0289d11c0ddf6f4decfd",
    },
    Vector {
        key: "2ae7081caebe54909820620a44a60a0f",
        iv: "fc5e783fbe7be12f58b1f025d82ada50",
        plaintext: "1ba93ee6f83752df47909585b3f28e56693f89e169d3093eee85175ea3a46cd3",
        ciphertext: "7944957a99e473e2c07eb496a83ec4e55db2fb44ebdd42bb611e0def29b23a73ac37eb0f4f5d86f090f3ddce3980425a",
    },
    Vector {
        key: "898be9cc5004ed0fa6e117c9a3099d31",
        iv: "9dea7621945988f96491083849b068df",
        plaintext: "0397f4f6820b1f9386f14403be5ac16e50213bd473b4874b9bcbf5f318ee686b1d",
        ciphertext: "e232cd6ef50047801ee681ec30f61d53cfd6b0bca02fd03c1b234baa10ea82ac9dab8b960926433a19ce6dea08677e34",
    },
];

/// SP 800-38A F.1.1, first block; ECB takes no IV
pub const ECB_128: Vector = Vector {
    key: NIST_KEY_128,
    iv: "",
    plaintext: "6bc1bee22e409f96e93d7e117393172a",
    ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
};

/// SP 800-38A F.5.1, first two blocks; the IV is the initial counter block
pub const CTR_128: Vector = Vector {
    key: NIST_KEY_128,
    iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
    plaintext: "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51",
    ciphertext: "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff",
};
