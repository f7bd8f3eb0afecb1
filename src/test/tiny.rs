use crate::{block::BLOCK_SIZE, state::AezState, tiny::aez_tiny};

fn keyed_state(key: &[u8]) -> AezState {
    let mut state = AezState::new();
    state.init(key);
    state
}

#[test]
fn round_trips_at_every_short_length() {
    let state = keyed_state(b"aez-tiny round-trip test key");
    let delta = [0x42u8; BLOCK_SIZE];
    for in_bytes in 1..BLOCK_SIZE * 2 {
        let data: Vec<u8> = (0..in_bytes).map(|i| (i * 7 + 3) as u8).collect();
        let mut enciphered = vec![0u8; in_bytes];
        aez_tiny(&state, &delta, &data, 0, &mut enciphered);
        let mut deciphered = vec![0u8; in_bytes];
        aez_tiny(&state, &delta, &enciphered, 1, &mut deciphered);
        assert_eq!(deciphered, data, "round-trip failed at {in_bytes} bytes");
    }
}

#[test]
fn different_deltas_give_different_ciphertexts() {
    let state = keyed_state(b"aez-tiny delta-sensitivity test key");
    let data = b"a short message";
    let mut out_a = vec![0u8; data.len()];
    let mut out_b = vec![0u8; data.len()];
    aez_tiny(&state, &[0u8; BLOCK_SIZE], data, 0, &mut out_a);
    aez_tiny(&state, &[1u8; BLOCK_SIZE], data, 0, &mut out_b);
    assert_ne!(out_a, out_b);
}

#[test]
fn round_trips_for_random_keys_and_messages() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    for _ in 0..40 {
        let key: Vec<u8> = (0..rng.gen_range(16..64)).map(|_| rng.gen()).collect();
        let in_bytes = rng.gen_range(1..BLOCK_SIZE * 2);
        let data: Vec<u8> = (0..in_bytes).map(|_| rng.gen()).collect();
        let mut delta = [0u8; BLOCK_SIZE];
        rng.fill(&mut delta);

        let state = keyed_state(&key);
        let mut enciphered = vec![0u8; in_bytes];
        aez_tiny(&state, &delta, &data, 0, &mut enciphered);
        let mut deciphered = vec![0u8; in_bytes];
        aez_tiny(&state, &delta, &enciphered, 1, &mut deciphered);
        assert_eq!(deciphered, data);
    }
}
