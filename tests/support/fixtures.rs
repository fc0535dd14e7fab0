//! Test fixtures and constants.

/// Primary key owner used across tests.
pub const NAME: &str = "John Doe";
pub const EMAIL: &str = "john_doe@example.com";

/// Secret keyring listing for one primary key with one sub-key, as gpg
/// prints it with `--with-colons --with-fingerprint`.
pub const SECRET_LISTING: &str = "sec:u:255:22:B0E9F87A6B5C4D3E:1700000000:::u:::cC:::+:::ed25519:::0:\r\n\
fpr:::::::::0D9E2C5A7B14F3E6A8C2D1B0B0E9F87A6B5C4D3E:\r\n\
grp:::::::::3F1C0A9B8D7E6F5A4B3C2D1E0F9A8B7C6D5E4F3A:\r\n\
uid:u::::1700000000::7C0B1E5D9A2F4C6E8B0D1F3A5C7E9B1D3F5A7C9E::John Doe <john_doe@example.com>::::::::::0:\r\n\
ssb:u:255:22:7A6B5C4D3E2F1A0B:1700000100:1731636100:::::s:::+:::ed25519::\r\n\
fpr:::::::::9A8B7C6D5E4F3A2B1C0D9E8F7A6B5C4D3E2F1A0B:\r\n\
grp:::::::::5D4C3B2A1F0E9D8C7B6A5F4E3D2C1B0A9F8E7D6C:\r\n";

pub const PRIMARY_FPR: &str = "0D9E2C5A7B14F3E6A8C2D1B0B0E9F87A6B5C4D3E";
pub const SUB_FPR: &str = "9A8B7C6D5E4F3A2B1C0D9E8F7A6B5C4D3E2F1A0B";

/// Public keyring listing matching [`SECRET_LISTING`].
pub fn public_listing() -> String {
    format!(
        "tru::1:1700000000:0:3:1:5\r\n{}",
        SECRET_LISTING.replace("sec:", "pub:").replace("ssb:", "sub:")
    )
}

/// A minimal armored public key block.
pub const PUBLIC_BLOCK: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----\r\n\r\n\
mDMEZVQ5gBYJKwYBBAHaRw8BAQdA1pXn8qvQ2pJtIu6Ld8Gm4V9oYy1nqZbqZPfTr5xjv2K0\r\n\
=Xk3Q\r\n\
-----END PGP PUBLIC KEY BLOCK-----\r\n";
