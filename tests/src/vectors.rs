//! Worked-example vectors from GM/T 0003 and GM/T 0004
//!
//! All SM2 vectors use the 256-bit example curve
//! (`PrimeFieldCurve::sm2_example`). Hex is lowercase where compared
//! against `hex::encode` output.

/// SM3 of `"abc"`
pub const SM3_ABC: &str = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";

/// SM3 of `"abcd"` repeated 16 times
pub const SM3_ABCD_X16: &str = "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732";

/// SM3 of the empty message
pub const SM3_EMPTY: &str = "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b";

/// Signature example
pub mod signature {
    /// Signer identity
    pub const ID: &[u8] = b"ALICE123@YAHOO.COM";
    /// Private key
    pub const D: &str = "128B2FA8BD433C6C068C8D803DFF79792A519A55171B1B650C23661D15897263";
    /// `Z` of the signer
    pub const Z: &str = "f4a38489e32b45b6f876e3ac2168ca392362dc8f23459c1d1146fc3dbfb7bc9a";
    /// Signed message
    pub const MESSAGE: &[u8] = b"message digest";
    /// `e = SM3(Z || M)`
    pub const E: &str = "b524f552cd82b8b028476e005c377fb19a87e6fc682d48bb5d42e3d9b9effe76";
    /// Signing nonce
    pub const K: &str = "6CB28D99385C175C94F94E934817663FC176D925DD72B727260DBAAE1FB2F96F";
    /// Expected `r`
    pub const R: &str = "40f1ec59f793d9f49e09dcef49130d4194f79fb1eed2caa55bacdb49c4e755d1";
    /// Expected `s`
    pub const S: &str = "6fc6dac32c5d5cf10c77dfb20f7c2eb667a457872fb09ec56327a67ec7deebe7";
}

/// Public key encryption example
pub mod encryption {
    /// Recipient private key
    pub const D: &str = "1649AB77A00637BD5E2EFE283FBF353534AA7F7CB89463F208DDBC2920BB0DA0";
    /// Encryption nonce
    pub const K: &str = "4C62EEFD6ECFC2B95B92FD6C3D9575148AFA17425546D49018E5388D49DD7B4F";
    /// Plaintext
    pub const MESSAGE: &[u8] = b"encryption standard";
    /// `C1 = [k]G`, x coordinate
    pub const C1_X: &str = "245c26fb68b1ddddb12c4b6bf9f2b6d5fe60a383b0d18d1c4144abf17f6252e7";
    /// `C1 = [k]G`, y coordinate
    pub const C1_Y: &str = "76cb9264c2a7e88e52b19903fdc47378f605e36811f5c07423a24b84400f01b8";
    /// Masked plaintext
    pub const C2: &str = "650053a89b41c418b0c3aad00d886c00286467";
    /// `SM3(x2 || M || y2)`
    pub const C3: &str = "9c3d7360c30156fab7c80a0276712da9d8094a634b766d3a285e07480653426d";
}

/// Key exchange example, 128-bit key
pub mod key_exchange {
    /// Initiator identity
    pub const ID_A: &[u8] = b"ALICE123@YAHOO.COM";
    /// Responder identity
    pub const ID_B: &[u8] = b"BILL456@YAHOO.COM";
    /// Initiator static private key
    pub const DA: &str = "6FCBA2EF9AE0AB902BC3BDE3FF915D44BA4CC78F88E2F8E7F8996D3B8CCEEDEE";
    /// Initiator ephemeral private key
    pub const RA: &str = "83A2C9C8B96E5AF70BD480B472409A9A327257F1EBB73F5B073354B248668563";
    /// Responder static private key
    pub const DB: &str = "5E35D7D3F3C54DBAC72E61819E730B019A84208CA3A35E4C2E353DFCCB2A3B53";
    /// Responder ephemeral private key
    pub const RB: &str = "33FE21940342161C55619C4A0C060293D543C80AF19748CE176D83477DE71C80";
    /// Key length in bytes
    pub const KEY_LEN: usize = 16;
    /// Agreed key
    pub const KEY: &str = "55b0ac62a6b927ba23703832c853ded4";
    /// Responder's tag to the initiator
    pub const SB: &str = "284c8f198f141b502e81250f1581c7e9eeb4ca6990f9e02df388b45471f5bc5c";
    /// Initiator's tag to the responder
    pub const SA: &str = "23444daf8ed7534366cb901c84b3bdbb63504f4065c1116c91a4c00697e6cf7a";
}
