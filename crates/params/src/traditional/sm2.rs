//! SM2 domain parameters (GM/T 0003.5)

/// Hex encoded parameters of a short Weierstrass curve `y^2 = x^3 + ax + b` over `F_p`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParamsHex {
    /// Coefficient `a`
    pub a: &'static str,
    /// Coefficient `b`
    pub b: &'static str,
    /// Field prime `p`
    pub p: &'static str,
    /// Generator x coordinate
    pub gx: &'static str,
    /// Generator y coordinate
    pub gy: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Cofactor
    pub h: &'static str,
}

/// The recommended 256-bit SM2 curve
pub const SM2_P256: CurveParamsHex = CurveParamsHex {
    a: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC",
    b: "28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93",
    p: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF",
    gx: "32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7",
    gy: "BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0",
    n: "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123",
    h: "1",
};

/// The 256-bit prime curve used by the worked examples of GM/T 0003
pub const SM2_EXAMPLE_P256: CurveParamsHex = CurveParamsHex {
    a: "787968B4FA32C3FD2417842E73BBFEFF2F3C848B6831D7E0EC65228B3937E498",
    b: "63E4C6D3B23B0C849CF84241484BFE48F61D59A5B16BA06E6E12D1DA27C5249A",
    p: "8542D69E4C044F18E8B92435BF6FF7DE457283915C45517D722EDB8B08F1DFC3",
    gx: "421DEBD61B62EAB6746434EBC3CC315E32220B3BADD50BDC4C4E6C147FEDD43D",
    gy: "0680512BCBB42C07D47349D2153B70C4E5D7FDFCBFA36EA1A85841B9E46E09A2",
    n: "8542D69E4C044F18E8B92435BF6FF7DD297720630485628D5AE74EE7C32E79B7",
    h: "1",
};

/// Smallest admissible bit length of the field prime
pub const SM2_MIN_FIELD_BITS: u64 = 192;

/// Largest identity accepted when computing Z, in bytes (ENTL is a 16-bit bit count)
pub const SM2_MAX_IDENTITY_LEN: usize = 8191;

/// Default user identity from GM/T 0009
pub const SM2_DEFAULT_ID: &[u8] = b"1234567812345678";

/// Point encoding prefixes
pub const POINT_INFINITY: u8 = 0x00;
/// Compressed point with even y
pub const POINT_COMPRESSED_EVEN: u8 = 0x02;
/// Compressed point with odd y
pub const POINT_COMPRESSED_ODD: u8 = 0x03;
/// Uncompressed point
pub const POINT_UNCOMPRESSED: u8 = 0x04;
/// Hybrid point with even y
pub const POINT_HYBRID_EVEN: u8 = 0x06;
/// Hybrid point with odd y
pub const POINT_HYBRID_ODD: u8 = 0x07;

/// Largest shared key a key exchange will derive, in bytes
pub const SM2_KX_MAX_KEY_LEN: usize = 4096;

/// Key confirmation prefix of the responder's tag (S_B / S_1)
pub const SM2_KX_RESPONDER_TAG_PREFIX: u8 = 0x02;
/// Key confirmation prefix of the initiator's tag (S_A / S_2)
pub const SM2_KX_INITIATOR_TAG_PREFIX: u8 = 0x03;
