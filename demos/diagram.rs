use prefix_tree::trie::{Trie, TrieString};
use rand::{rng, seq::IndexedRandom};

fn main() {
    static POPULATION_SIZE: usize = 12;
    static WORDS: &[&str] = &[
        "test", "tester", "testing", "tess", "alpha", "alphabet", "aloe", "altar", "alt", "world",
        "worm", "word", "wore", "tea", "team", "teal",
    ];

    // Create our trie from a random selection of words
    let mut trie: TrieString<usize> = Trie::new();
    for (i, word) in WORDS
        .choose_multiple(&mut rng(), POPULATION_SIZE)
        .enumerate()
    {
        trie.insert(*word, i);
    }
    println!("{trie}");

    // Erase half of them again and show what is left
    println!();
    for word in WORDS.iter().step_by(2) {
        if trie.erase(*word) {
            println!("erased {word}");
        }
    }
    println!();
    println!("{trie}");
}
