use crate::{
    block::Block, decrypt::decrypt, hash::aez_hash, prf::aez_prf, state::AezState,
    tiny::aez_tiny, wideblock::aez_core,
};

fn encipher(state: &AezState, delta: &Block, data: &[u8], dst: &mut [u8]) {
    if data.is_empty() {
        return;
    }
    if data.len() < 32 {
        aez_tiny(state, delta, data, 0, dst);
    } else {
        aez_core(state, delta, data, 0, dst);
    }
}

#[test]
fn decrypts_a_freshly_encrypted_message() {
    let key = b"decrypt driver test key material";
    let ad: &[u8] = b"version-and-salt";
    let tau = 4;
    let message = b"a sixteen byte dummy entropy!!!!and a bit more for luck";

    let mut state = AezState::new();
    state.init(key);
    let delta = aez_hash(&state, &[], &[ad], (tau * 8) as u32);

    let mut padded = message.to_vec();
    padded.extend(std::iter::repeat(0).take(tau));
    let mut ciphertext = vec![0u8; padded.len()];
    encipher(&state, &delta, &padded, &mut ciphertext);

    let plaintext = decrypt(key, &[ad], tau, &ciphertext).expect("tag should verify");
    assert_eq!(plaintext, message);
}

#[test]
fn wrong_key_fails_to_verify() {
    let key = b"decrypt driver test key material";
    let other_key = b"a totally different key material";
    let ad: &[u8] = b"version-and-salt";
    let tau = 4;
    let message = b"another dummy payload, long enough to hit aez-core";

    let mut state = AezState::new();
    state.init(key);
    let delta = aez_hash(&state, &[], &[ad], (tau * 8) as u32);
    let mut padded = message.to_vec();
    padded.extend(std::iter::repeat(0).take(tau));
    let mut ciphertext = vec![0u8; padded.len()];
    encipher(&state, &delta, &padded, &mut ciphertext);

    assert!(decrypt(other_key, &[ad], tau, &ciphertext).is_none());
}

#[test]
fn empty_message_uses_the_prf_only_path() {
    let key = b"decrypt driver test key material";
    let ad: &[u8] = b"version-and-salt";
    let tau = 4;

    let mut state = AezState::new();
    state.init(key);
    let delta = aez_hash(&state, &[], &[ad], (tau * 8) as u32);
    let mut tag = vec![0u8; tau];
    aez_prf(&state, &delta, &mut tag);

    let plaintext = decrypt(key, &[ad], tau, &tag).expect("tag should verify");
    assert!(plaintext.is_empty());
}

#[test]
fn ciphertext_shorter_than_the_tag_is_rejected_without_panicking() {
    let key = b"decrypt driver test key material";
    let ad: &[u8] = b"version-and-salt";
    let tau = 4;

    assert!(decrypt(key, &[ad], tau, &[]).is_none());
    for len in 1..tau {
        let ciphertext = vec![0u8; len];
        assert!(decrypt(key, &[ad], tau, &ciphertext).is_none());
    }
}
