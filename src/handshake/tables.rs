//! Wire-code to name mappings for TLS versions and cipher suites.
//!
//! Both lookups are two-valued: a hit returns the canonical name, a miss
//! returns `None` and the caller renders the code with [`wire_hex`]. New
//! suites are registered upstream continuously, so a miss is expected and
//! never an error.

pub fn version_name(code: u16) -> Option<&'static str> {
    match code {
        0x0300 => Some("SSLv3"),
        0x0301 => Some("TLSv1.0"),
        0x0302 => Some("TLSv1.1"),
        0x0303 => Some("TLSv1.2"),
        0x0304 => Some("TLSv1.3"),
        _ => None,
    }
}

/// Lowercase `0x`-prefixed hex with no zero padding: `5` renders as `0x5`,
/// never `0x05`.
pub fn wire_hex(code: u16) -> String {
    format!("{code:#x}")
}

/// IANA cipher-suite names, including the GOST and SM4 registrations.
pub fn cipher_suite_name(code: u16) -> Option<&'static str> {
    match code {
        0x0000 => Some("TLS_NULL_WITH_NULL_NULL"),
        0x0001 => Some("TLS_RSA_WITH_NULL_MD5"),
        0x0002 => Some("TLS_RSA_WITH_NULL_SHA"),
        0x0003 => Some("TLS_RSA_EXPORT_WITH_RC4_40_MD5"),
        0x0004 => Some("TLS_RSA_WITH_RC4_128_MD5"),
        0x0005 => Some("TLS_RSA_WITH_RC4_128_SHA"),
        0x0006 => Some("TLS_RSA_EXPORT_WITH_RC2_CBC_40_MD5"),
        0x0007 => Some("TLS_RSA_WITH_IDEA_CBC_SHA"),
        0x0008 => Some("TLS_RSA_EXPORT_WITH_DES40_CBC_SHA"),
        0x0009 => Some("TLS_RSA_WITH_DES_CBC_SHA"),
        0x000a => Some("TLS_RSA_WITH_3DES_EDE_CBC_SHA"),
        0x000b => Some("TLS_DH_DSS_EXPORT_WITH_DES40_CBC_SHA"),
        0x000c => Some("TLS_DH_DSS_WITH_DES_CBC_SHA"),
        0x000d => Some("TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA"),
        0x000e => Some("TLS_DH_RSA_EXPORT_WITH_DES40_CBC_SHA"),
        0x000f => Some("TLS_DH_RSA_WITH_DES_CBC_SHA"),
        0x0010 => Some("TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA"),
        0x0011 => Some("TLS_DHE_DSS_EXPORT_WITH_DES40_CBC_SHA"),
        0x0012 => Some("TLS_DHE_DSS_WITH_DES_CBC_SHA"),
        0x0013 => Some("TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA"),
        0x0014 => Some("TLS_DHE_RSA_EXPORT_WITH_DES40_CBC_SHA"),
        0x0015 => Some("TLS_DHE_RSA_WITH_DES_CBC_SHA"),
        0x0016 => Some("TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA"),
        0x0017 => Some("TLS_DH_anon_EXPORT_WITH_RC4_40_MD5"),
        0x0018 => Some("TLS_DH_anon_WITH_RC4_128_MD5"),
        0x0019 => Some("TLS_DH_anon_EXPORT_WITH_DES40_CBC_SHA"),
        0x001a => Some("TLS_DH_anon_WITH_DES_CBC_SHA"),
        0x001b => Some("TLS_DH_anon_WITH_3DES_EDE_CBC_SHA"),
        0x001e => Some("TLS_KRB5_WITH_DES_CBC_SHA"),
        0x001f => Some("TLS_KRB5_WITH_3DES_EDE_CBC_SHA"),
        0x0020 => Some("TLS_KRB5_WITH_RC4_128_SHA"),
        0x0021 => Some("TLS_KRB5_WITH_IDEA_CBC_SHA"),
        0x0022 => Some("TLS_KRB5_WITH_DES_CBC_MD5"),
        0x0023 => Some("TLS_KRB5_WITH_3DES_EDE_CBC_MD5"),
        0x0024 => Some("TLS_KRB5_WITH_RC4_128_MD5"),
        0x0025 => Some("TLS_KRB5_WITH_IDEA_CBC_MD5"),
        0x0026 => Some("TLS_KRB5_EXPORT_WITH_DES_CBC_40_SHA"),
        0x0027 => Some("TLS_KRB5_EXPORT_WITH_RC2_CBC_40_SHA"),
        0x0028 => Some("TLS_KRB5_EXPORT_WITH_RC4_40_SHA"),
        0x0029 => Some("TLS_KRB5_EXPORT_WITH_DES_CBC_40_MD5"),
        0x002a => Some("TLS_KRB5_EXPORT_WITH_RC2_CBC_40_MD5"),
        0x002b => Some("TLS_KRB5_EXPORT_WITH_RC4_40_MD5"),
        0x002c => Some("TLS_PSK_WITH_NULL_SHA"),
        0x002d => Some("TLS_DHE_PSK_WITH_NULL_SHA"),
        0x002e => Some("TLS_RSA_PSK_WITH_NULL_SHA"),
        0x002f => Some("TLS_RSA_WITH_AES_128_CBC_SHA"),
        0x0030 => Some("TLS_DH_DSS_WITH_AES_128_CBC_SHA"),
        0x0031 => Some("TLS_DH_RSA_WITH_AES_128_CBC_SHA"),
        0x0032 => Some("TLS_DHE_DSS_WITH_AES_128_CBC_SHA"),
        0x0033 => Some("TLS_DHE_RSA_WITH_AES_128_CBC_SHA"),
        0x0034 => Some("TLS_DH_anon_WITH_AES_128_CBC_SHA"),
        0x0035 => Some("TLS_RSA_WITH_AES_256_CBC_SHA"),
        0x0036 => Some("TLS_DH_DSS_WITH_AES_256_CBC_SHA"),
        0x0037 => Some("TLS_DH_RSA_WITH_AES_256_CBC_SHA"),
        0x0038 => Some("TLS_DHE_DSS_WITH_AES_256_CBC_SHA"),
        0x0039 => Some("TLS_DHE_RSA_WITH_AES_256_CBC_SHA"),
        0x003a => Some("TLS_DH_anon_WITH_AES_256_CBC_SHA"),
        0x003b => Some("TLS_RSA_WITH_NULL_SHA256"),
        0x003c => Some("TLS_RSA_WITH_AES_128_CBC_SHA256"),
        0x003d => Some("TLS_RSA_WITH_AES_256_CBC_SHA256"),
        0x003e => Some("TLS_DH_DSS_WITH_AES_128_CBC_SHA256"),
        0x003f => Some("TLS_DH_RSA_WITH_AES_128_CBC_SHA256"),
        0x0040 => Some("TLS_DHE_DSS_WITH_AES_128_CBC_SHA256"),
        0x0041 => Some("TLS_RSA_WITH_CAMELLIA_128_CBC_SHA"),
        0x0042 => Some("TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA"),
        0x0043 => Some("TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA"),
        0x0044 => Some("TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA"),
        0x0045 => Some("TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA"),
        0x0046 => Some("TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA"),
        0x0067 => Some("TLS_DHE_RSA_WITH_AES_128_CBC_SHA256"),
        0x0068 => Some("TLS_DH_DSS_WITH_AES_256_CBC_SHA256"),
        0x0069 => Some("TLS_DH_RSA_WITH_AES_256_CBC_SHA256"),
        0x006a => Some("TLS_DHE_DSS_WITH_AES_256_CBC_SHA256"),
        0x006b => Some("TLS_DHE_RSA_WITH_AES_256_CBC_SHA256"),
        0x006c => Some("TLS_DH_anon_WITH_AES_128_CBC_SHA256"),
        0x006d => Some("TLS_DH_anon_WITH_AES_256_CBC_SHA256"),
        0x0084 => Some("TLS_RSA_WITH_CAMELLIA_256_CBC_SHA"),
        0x0085 => Some("TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA"),
        0x0086 => Some("TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA"),
        0x0087 => Some("TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA"),
        0x0088 => Some("TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA"),
        0x0089 => Some("TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA"),
        0x008a => Some("TLS_PSK_WITH_RC4_128_SHA"),
        0x008b => Some("TLS_PSK_WITH_3DES_EDE_CBC_SHA"),
        0x008c => Some("TLS_PSK_WITH_AES_128_CBC_SHA"),
        0x008d => Some("TLS_PSK_WITH_AES_256_CBC_SHA"),
        0x008e => Some("TLS_DHE_PSK_WITH_RC4_128_SHA"),
        0x008f => Some("TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA"),
        0x0090 => Some("TLS_DHE_PSK_WITH_AES_128_CBC_SHA"),
        0x0091 => Some("TLS_DHE_PSK_WITH_AES_256_CBC_SHA"),
        0x0092 => Some("TLS_RSA_PSK_WITH_RC4_128_SHA"),
        0x0093 => Some("TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA"),
        0x0094 => Some("TLS_RSA_PSK_WITH_AES_128_CBC_SHA"),
        0x0095 => Some("TLS_RSA_PSK_WITH_AES_256_CBC_SHA"),
        0x0096 => Some("TLS_RSA_WITH_SEED_CBC_SHA"),
        0x0097 => Some("TLS_DH_DSS_WITH_SEED_CBC_SHA"),
        0x0098 => Some("TLS_DH_RSA_WITH_SEED_CBC_SHA"),
        0x0099 => Some("TLS_DHE_DSS_WITH_SEED_CBC_SHA"),
        0x009a => Some("TLS_DHE_RSA_WITH_SEED_CBC_SHA"),
        0x009b => Some("TLS_DH_anon_WITH_SEED_CBC_SHA"),
        0x009c => Some("TLS_RSA_WITH_AES_128_GCM_SHA256"),
        0x009d => Some("TLS_RSA_WITH_AES_256_GCM_SHA384"),
        0x009e => Some("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256"),
        0x009f => Some("TLS_DHE_RSA_WITH_AES_256_GCM_SHA384"),
        0x00a0 => Some("TLS_DH_RSA_WITH_AES_128_GCM_SHA256"),
        0x00a1 => Some("TLS_DH_RSA_WITH_AES_256_GCM_SHA384"),
        0x00a2 => Some("TLS_DHE_DSS_WITH_AES_128_GCM_SHA256"),
        0x00a3 => Some("TLS_DHE_DSS_WITH_AES_256_GCM_SHA384"),
        0x00a4 => Some("TLS_DH_DSS_WITH_AES_128_GCM_SHA256"),
        0x00a5 => Some("TLS_DH_DSS_WITH_AES_256_GCM_SHA384"),
        0x00a6 => Some("TLS_DH_anon_WITH_AES_128_GCM_SHA256"),
        0x00a7 => Some("TLS_DH_anon_WITH_AES_256_GCM_SHA384"),
        0x00a8 => Some("TLS_PSK_WITH_AES_128_GCM_SHA256"),
        0x00a9 => Some("TLS_PSK_WITH_AES_256_GCM_SHA384"),
        0x00aa => Some("TLS_DHE_PSK_WITH_AES_128_GCM_SHA256"),
        0x00ab => Some("TLS_DHE_PSK_WITH_AES_256_GCM_SHA384"),
        0x00ac => Some("TLS_RSA_PSK_WITH_AES_128_GCM_SHA256"),
        0x00ad => Some("TLS_RSA_PSK_WITH_AES_256_GCM_SHA384"),
        0x00ae => Some("TLS_PSK_WITH_AES_128_CBC_SHA256"),
        0x00af => Some("TLS_PSK_WITH_AES_256_CBC_SHA384"),
        0x00b0 => Some("TLS_PSK_WITH_NULL_SHA256"),
        0x00b1 => Some("TLS_PSK_WITH_NULL_SHA384"),
        0x00b2 => Some("TLS_DHE_PSK_WITH_AES_128_CBC_SHA256"),
        0x00b3 => Some("TLS_DHE_PSK_WITH_AES_256_CBC_SHA384"),
        0x00b4 => Some("TLS_DHE_PSK_WITH_NULL_SHA256"),
        0x00b5 => Some("TLS_DHE_PSK_WITH_NULL_SHA384"),
        0x00b6 => Some("TLS_RSA_PSK_WITH_AES_128_CBC_SHA256"),
        0x00b7 => Some("TLS_RSA_PSK_WITH_AES_256_CBC_SHA384"),
        0x00b8 => Some("TLS_RSA_PSK_WITH_NULL_SHA256"),
        0x00b9 => Some("TLS_RSA_PSK_WITH_NULL_SHA384"),
        0x00ba => Some("TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00bb => Some("TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00bc => Some("TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00bd => Some("TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00be => Some("TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00bf => Some("TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256"),
        0x00c0 => Some("TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c1 => Some("TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c2 => Some("TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c3 => Some("TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c4 => Some("TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c5 => Some("TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256"),
        0x00c6 => Some("TLS_SM4_GCM_SM3"),
        0x00c7 => Some("TLS_SM4_CCM_SM3"),
        0x00ff => Some("TLS_EMPTY_RENEGOTIATION_INFO_SCSV"),
        0x1301 => Some("TLS_AES_128_GCM_SHA256"),
        0x1302 => Some("TLS_AES_256_GCM_SHA384"),
        0x1303 => Some("TLS_CHACHA20_POLY1305_SHA256"),
        0x1304 => Some("TLS_AES_128_CCM_SHA256"),
        0x1305 => Some("TLS_AES_128_CCM_8_SHA256"),
        0x5600 => Some("TLS_FALLBACK_SCSV"),
        0xc001 => Some("TLS_ECDH_ECDSA_WITH_NULL_SHA"),
        0xc002 => Some("TLS_ECDH_ECDSA_WITH_RC4_128_SHA"),
        0xc003 => Some("TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA"),
        0xc004 => Some("TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA"),
        0xc005 => Some("TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA"),
        0xc006 => Some("TLS_ECDHE_ECDSA_WITH_NULL_SHA"),
        0xc007 => Some("TLS_ECDHE_ECDSA_WITH_RC4_128_SHA"),
        0xc008 => Some("TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA"),
        0xc009 => Some("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA"),
        0xc00a => Some("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA"),
        0xc00b => Some("TLS_ECDH_RSA_WITH_NULL_SHA"),
        0xc00c => Some("TLS_ECDH_RSA_WITH_RC4_128_SHA"),
        0xc00d => Some("TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA"),
        0xc00e => Some("TLS_ECDH_RSA_WITH_AES_128_CBC_SHA"),
        0xc00f => Some("TLS_ECDH_RSA_WITH_AES_256_CBC_SHA"),
        0xc010 => Some("TLS_ECDHE_RSA_WITH_NULL_SHA"),
        0xc011 => Some("TLS_ECDHE_RSA_WITH_RC4_128_SHA"),
        0xc012 => Some("TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA"),
        0xc013 => Some("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA"),
        0xc014 => Some("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA"),
        0xc015 => Some("TLS_ECDH_anon_WITH_NULL_SHA"),
        0xc016 => Some("TLS_ECDH_anon_WITH_RC4_128_SHA"),
        0xc017 => Some("TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA"),
        0xc018 => Some("TLS_ECDH_anon_WITH_AES_128_CBC_SHA"),
        0xc019 => Some("TLS_ECDH_anon_WITH_AES_256_CBC_SHA"),
        0xc01a => Some("TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA"),
        0xc01b => Some("TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA"),
        0xc01c => Some("TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA"),
        0xc01d => Some("TLS_SRP_SHA_WITH_AES_128_CBC_SHA"),
        0xc01e => Some("TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA"),
        0xc01f => Some("TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA"),
        0xc020 => Some("TLS_SRP_SHA_WITH_AES_256_CBC_SHA"),
        0xc021 => Some("TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA"),
        0xc022 => Some("TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA"),
        0xc023 => Some("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256"),
        0xc024 => Some("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384"),
        0xc025 => Some("TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256"),
        0xc026 => Some("TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384"),
        0xc027 => Some("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256"),
        0xc028 => Some("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384"),
        0xc029 => Some("TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256"),
        0xc02a => Some("TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384"),
        0xc02b => Some("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
        0xc02c => Some("TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
        0xc02d => Some("TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256"),
        0xc02e => Some("TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384"),
        0xc02f => Some("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"),
        0xc030 => Some("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"),
        0xc031 => Some("TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256"),
        0xc032 => Some("TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384"),
        0xc033 => Some("TLS_ECDHE_PSK_WITH_RC4_128_SHA"),
        0xc034 => Some("TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA"),
        0xc035 => Some("TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA"),
        0xc036 => Some("TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA"),
        0xc037 => Some("TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256"),
        0xc038 => Some("TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384"),
        0xc039 => Some("TLS_ECDHE_PSK_WITH_NULL_SHA"),
        0xc03a => Some("TLS_ECDHE_PSK_WITH_NULL_SHA256"),
        0xc03b => Some("TLS_ECDHE_PSK_WITH_NULL_SHA384"),
        0xc03c => Some("TLS_RSA_WITH_ARIA_128_CBC_SHA256"),
        0xc03d => Some("TLS_RSA_WITH_ARIA_256_CBC_SHA384"),
        0xc03e => Some("TLS_DH_DSS_WITH_ARIA_128_CBC_SHA256"),
        0xc03f => Some("TLS_DH_DSS_WITH_ARIA_256_CBC_SHA384"),
        0xc040 => Some("TLS_DH_RSA_WITH_ARIA_128_CBC_SHA256"),
        0xc041 => Some("TLS_DH_RSA_WITH_ARIA_256_CBC_SHA384"),
        0xc042 => Some("TLS_DHE_DSS_WITH_ARIA_128_CBC_SHA256"),
        0xc043 => Some("TLS_DHE_DSS_WITH_ARIA_256_CBC_SHA384"),
        0xc044 => Some("TLS_DHE_RSA_WITH_ARIA_128_CBC_SHA256"),
        0xc045 => Some("TLS_DHE_RSA_WITH_ARIA_256_CBC_SHA384"),
        0xc046 => Some("TLS_DH_anon_WITH_ARIA_128_CBC_SHA256"),
        0xc047 => Some("TLS_DH_anon_WITH_ARIA_256_CBC_SHA384"),
        0xc048 => Some("TLS_ECDHE_ECDSA_WITH_ARIA_128_CBC_SHA256"),
        0xc049 => Some("TLS_ECDHE_ECDSA_WITH_ARIA_256_CBC_SHA384"),
        0xc04a => Some("TLS_ECDH_ECDSA_WITH_ARIA_128_CBC_SHA256"),
        0xc04b => Some("TLS_ECDH_ECDSA_WITH_ARIA_256_CBC_SHA384"),
        0xc04c => Some("TLS_ECDHE_RSA_WITH_ARIA_128_CBC_SHA256"),
        0xc04d => Some("TLS_ECDHE_RSA_WITH_ARIA_256_CBC_SHA384"),
        0xc04e => Some("TLS_ECDH_RSA_WITH_ARIA_128_CBC_SHA256"),
        0xc04f => Some("TLS_ECDH_RSA_WITH_ARIA_256_CBC_SHA384"),
        0xc050 => Some("TLS_RSA_WITH_ARIA_128_GCM_SHA256"),
        0xc051 => Some("TLS_RSA_WITH_ARIA_256_GCM_SHA384"),
        0xc052 => Some("TLS_DHE_RSA_WITH_ARIA_128_GCM_SHA256"),
        0xc053 => Some("TLS_DHE_RSA_WITH_ARIA_256_GCM_SHA384"),
        0xc054 => Some("TLS_DH_RSA_WITH_ARIA_128_GCM_SHA256"),
        0xc055 => Some("TLS_DH_RSA_WITH_ARIA_256_GCM_SHA384"),
        0xc056 => Some("TLS_DHE_DSS_WITH_ARIA_128_GCM_SHA256"),
        0xc057 => Some("TLS_DHE_DSS_WITH_ARIA_256_GCM_SHA384"),
        0xc058 => Some("TLS_DH_DSS_WITH_ARIA_128_GCM_SHA256"),
        0xc059 => Some("TLS_DH_DSS_WITH_ARIA_256_GCM_SHA384"),
        0xc05a => Some("TLS_DH_anon_WITH_ARIA_128_GCM_SHA256"),
        0xc05b => Some("TLS_DH_anon_WITH_ARIA_256_GCM_SHA384"),
        0xc05c => Some("TLS_ECDHE_ECDSA_WITH_ARIA_128_GCM_SHA256"),
        0xc05d => Some("TLS_ECDHE_ECDSA_WITH_ARIA_256_GCM_SHA384"),
        0xc05e => Some("TLS_ECDH_ECDSA_WITH_ARIA_128_GCM_SHA256"),
        0xc05f => Some("TLS_ECDH_ECDSA_WITH_ARIA_256_GCM_SHA384"),
        0xc060 => Some("TLS_ECDHE_RSA_WITH_ARIA_128_GCM_SHA256"),
        0xc061 => Some("TLS_ECDHE_RSA_WITH_ARIA_256_GCM_SHA384"),
        0xc062 => Some("TLS_ECDH_RSA_WITH_ARIA_128_GCM_SHA256"),
        0xc063 => Some("TLS_ECDH_RSA_WITH_ARIA_256_GCM_SHA384"),
        0xc064 => Some("TLS_PSK_WITH_ARIA_128_CBC_SHA256"),
        0xc065 => Some("TLS_PSK_WITH_ARIA_256_CBC_SHA384"),
        0xc066 => Some("TLS_DHE_PSK_WITH_ARIA_128_CBC_SHA256"),
        0xc067 => Some("TLS_DHE_PSK_WITH_ARIA_256_CBC_SHA384"),
        0xc068 => Some("TLS_RSA_PSK_WITH_ARIA_128_CBC_SHA256"),
        0xc069 => Some("TLS_RSA_PSK_WITH_ARIA_256_CBC_SHA384"),
        0xc06a => Some("TLS_PSK_WITH_ARIA_128_GCM_SHA256"),
        0xc06b => Some("TLS_PSK_WITH_ARIA_256_GCM_SHA384"),
        0xc06c => Some("TLS_DHE_PSK_WITH_ARIA_128_GCM_SHA256"),
        0xc06d => Some("TLS_DHE_PSK_WITH_ARIA_256_GCM_SHA384"),
        0xc06e => Some("TLS_RSA_PSK_WITH_ARIA_128_GCM_SHA256"),
        0xc06f => Some("TLS_RSA_PSK_WITH_ARIA_256_GCM_SHA384"),
        0xc070 => Some("TLS_ECDHE_PSK_WITH_ARIA_128_CBC_SHA256"),
        0xc071 => Some("TLS_ECDHE_PSK_WITH_ARIA_256_CBC_SHA384"),
        0xc072 => Some("TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc073 => Some("TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc074 => Some("TLS_ECDH_ECDSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc075 => Some("TLS_ECDH_ECDSA_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc076 => Some("TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc077 => Some("TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc078 => Some("TLS_ECDH_RSA_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc079 => Some("TLS_ECDH_RSA_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc07a => Some("TLS_RSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc07b => Some("TLS_RSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc07c => Some("TLS_DHE_RSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc07d => Some("TLS_DHE_RSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc07e => Some("TLS_DH_RSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc07f => Some("TLS_DH_RSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc080 => Some("TLS_DHE_DSS_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc081 => Some("TLS_DHE_DSS_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc082 => Some("TLS_DH_DSS_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc083 => Some("TLS_DH_DSS_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc084 => Some("TLS_DH_anon_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc085 => Some("TLS_DH_anon_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc086 => Some("TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc087 => Some("TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc088 => Some("TLS_ECDH_ECDSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc089 => Some("TLS_ECDH_ECDSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc08a => Some("TLS_ECDHE_RSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc08b => Some("TLS_ECDHE_RSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc08c => Some("TLS_ECDH_RSA_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc08d => Some("TLS_ECDH_RSA_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc08e => Some("TLS_PSK_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc08f => Some("TLS_PSK_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc090 => Some("TLS_DHE_PSK_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc091 => Some("TLS_DHE_PSK_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc092 => Some("TLS_RSA_PSK_WITH_CAMELLIA_128_GCM_SHA256"),
        0xc093 => Some("TLS_RSA_PSK_WITH_CAMELLIA_256_GCM_SHA384"),
        0xc094 => Some("TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc095 => Some("TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc096 => Some("TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc097 => Some("TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc098 => Some("TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc099 => Some("TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc09a => Some("TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256"),
        0xc09b => Some("TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384"),
        0xc09c => Some("TLS_RSA_WITH_AES_128_CCM"),
        0xc09d => Some("TLS_RSA_WITH_AES_256_CCM"),
        0xc09e => Some("TLS_DHE_RSA_WITH_AES_128_CCM"),
        0xc09f => Some("TLS_DHE_RSA_WITH_AES_256_CCM"),
        0xc0a0 => Some("TLS_RSA_WITH_AES_128_CCM_8"),
        0xc0a1 => Some("TLS_RSA_WITH_AES_256_CCM_8"),
        0xc0a2 => Some("TLS_DHE_RSA_WITH_AES_128_CCM_8"),
        0xc0a3 => Some("TLS_DHE_RSA_WITH_AES_256_CCM_8"),
        0xc0a4 => Some("TLS_PSK_WITH_AES_128_CCM"),
        0xc0a5 => Some("TLS_PSK_WITH_AES_256_CCM"),
        0xc0a6 => Some("TLS_DHE_PSK_WITH_AES_128_CCM"),
        0xc0a7 => Some("TLS_DHE_PSK_WITH_AES_256_CCM"),
        0xc0a8 => Some("TLS_PSK_WITH_AES_128_CCM_8"),
        0xc0a9 => Some("TLS_PSK_WITH_AES_256_CCM_8"),
        0xc0aa => Some("TLS_PSK_DHE_WITH_AES_128_CCM_8"),
        0xc0ab => Some("TLS_PSK_DHE_WITH_AES_256_CCM_8"),
        0xc0ac => Some("TLS_ECDHE_ECDSA_WITH_AES_128_CCM"),
        0xc0ad => Some("TLS_ECDHE_ECDSA_WITH_AES_256_CCM"),
        0xc0ae => Some("TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8"),
        0xc0af => Some("TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8"),
        0xc0b0 => Some("TLS_ECCPWD_WITH_AES_128_GCM_SHA256"),
        0xc0b1 => Some("TLS_ECCPWD_WITH_AES_256_GCM_SHA384"),
        0xc0b2 => Some("TLS_ECCPWD_WITH_AES_128_CCM_SHA256"),
        0xc0b3 => Some("TLS_ECCPWD_WITH_AES_256_CCM_SHA384"),
        0xc0b4 => Some("TLS_SHA256_SHA256"),
        0xc0b5 => Some("TLS_SHA384_SHA384"),
        0xc100 => Some("TLS_GOSTR341112_256_WITH_KUZNYECHIK_CTR_OMAC"),
        0xc101 => Some("TLS_GOSTR341112_256_WITH_MAGMA_CTR_OMAC"),
        0xc102 => Some("TLS_GOSTR341112_256_WITH_28147_CNT_IMIT"),
        0xcca8 => Some("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
        0xcca9 => Some("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
        0xccaa => Some("TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
        0xccab => Some("TLS_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        0xccac => Some("TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        0xccad => Some("TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        0xccae => Some("TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        0xd001 => Some("TLS_ECDHE_PSK_WITH_AES_128_GCM_SHA256"),
        0xd002 => Some("TLS_ECDHE_PSK_WITH_AES_256_GCM_SHA384"),
        0xd003 => Some("TLS_ECDHE_PSK_WITH_AES_128_CCM_8_SHA256"),
        0xd005 => Some("TLS_ECDHE_PSK_WITH_AES_128_CCM_SHA256"),
        _ => None,
    }
}
