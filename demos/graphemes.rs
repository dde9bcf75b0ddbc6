use prefix_tree::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie: Trie<&str, usize> = Trie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input: Vec<&str> = s.graphemes(true).collect();
    let count = input.len();
    trie.insert(&input, count);
    assert!(trie.contains(&input));
    assert!(trie.contains_prefix(&input[..1]));
    assert_eq!(trie.get(&input), Some(&count));
    println!("{}", trie.to_string().escape_debug());
}
