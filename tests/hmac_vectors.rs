//! Golden-vector regression tests for the HMAC family
//!
//! The digests below are fixed, externally computed values; any drift in the
//! signing path shows up here as a literal mismatch rather than as a
//! self-consistent round trip.

use jose_jws::{parse, scheme_for, JwsAlgorithm, Key, VerificationState};

const SECRET: &[u8] = b"key";
const MESSAGE: &[u8] = b"1234";

#[test]
fn hs256_golden_digest() {
    let key = Key::symmetric(SECRET.to_vec());
    let signature = scheme_for(JwsAlgorithm::HS256)
        .unwrap()
        .sign(MESSAGE, &key)
        .unwrap();
    assert_eq!(
        hex::encode(signature),
        "280ed91eee6eb96a2b1cf598843c1308e84623d14e4208d96c20f7e2de81315e"
    );
}

#[test]
fn hs384_golden_digest() {
    let key = Key::symmetric(SECRET.to_vec());
    let signature = scheme_for(JwsAlgorithm::HS384)
        .unwrap()
        .sign(MESSAGE, &key)
        .unwrap();
    assert_eq!(
        hex::encode(signature),
        "682ef474a442069c734a885a7e4ffca6994a99a914ceea86cac63572edcdbc22fc477e9b8d7e4505fa52d840639d5c43"
    );
}

#[test]
fn hs512_golden_digest() {
    let key = Key::symmetric(SECRET.to_vec());
    let signature = scheme_for(JwsAlgorithm::HS512)
        .unwrap()
        .sign(MESSAGE, &key)
        .unwrap();
    assert_eq!(
        hex::encode(signature),
        "5d7ea93e116204a673674f9458d42bade8c85896fce87ff267ca52b8b2088d5c49799192856150c9a2e76db44917571c0e2848003d7702c78b232a0ba2dd654c"
    );
}

/// The canonical HS256 example token: header {"alg":"HS256","typ":"JWT"},
/// claims {"sub":"1234567890","name":"John Doe","admin":true}, secret "secret"
const KNOWN_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                           eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiYWRtaW4iOnRydWV9.\
                           TJVA95OrM7E2cBab30RMHrHDcEfxjoYZgeFONFh7HgQ";

fn known_token() -> String {
    KNOWN_TOKEN.split_whitespace().collect()
}

#[test]
fn end_to_end_known_token_verifies() {
    let mut token = parse(&known_token()).unwrap();
    assert_eq!(token.algorithm().unwrap(), "HS256");
    assert_eq!(
        token.claims().get_value("name").unwrap(),
        &serde_json::Value::from("John Doe")
    );

    let key = Key::symmetric(b"secret".to_vec());
    assert_eq!(token.verify(&key).unwrap(), VerificationState::Verified);

    let wrong = Key::symmetric(b"wrong".to_vec());
    assert_eq!(token.verify(&wrong).unwrap(), VerificationState::Invalid);
}

#[test]
fn end_to_end_signing_reproduces_known_token() {
    use jose_jws::{ClaimSet, JoseHeader, Token};

    let mut claims = ClaimSet::new();
    claims.set("sub", "1234567890");
    claims.set("name", "John Doe");
    claims.set("admin", true);

    let header = JoseHeader::with_algorithm(JwsAlgorithm::HS256).with_jwt_type();
    let mut token = Token::new(header, claims);

    let key = Key::symmetric(b"secret".to_vec());
    let signature = token.sign(&key).unwrap();
    token.attach_signature(signature).unwrap();

    assert_eq!(token.to_compact().unwrap(), known_token());
}
