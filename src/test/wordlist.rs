use crate::wordlist::WordList;

#[test]
fn embedded_list_has_2048_entries() {
    let list = WordList::default();
    assert_eq!(list.words.len(), 2048);
}

#[test]
fn first_and_last_entries_match_the_standard_list() {
    let list = WordList::default();
    assert_eq!(list.word_at(0), "abandon");
    assert_eq!(list.word_at(2047), "zoo");
}

#[test]
fn index_and_word_at_round_trip() {
    let list = WordList::default();
    for (i, &word) in list.words.iter().enumerate() {
        assert_eq!(list.index_of(word), Some(i as u16));
    }
}

#[test]
fn unknown_word_has_no_index() {
    let list = WordList::default();
    assert_eq!(list.index_of("notaword"), None);
}
