//! The same table over each case map backend.

use std::cmp::Ordering;
use switchyard::{
    BoxedCallable, BuildError, Directive, DispatchTable,
    maps::{HashedMap, KeyOrder, SortedMap},
};

type Greeting = fn(String) -> String;

fn greetings<K>(hello: K, bye: K) -> Vec<Directive<K, Greeting>> {
    vec![
        Directive::case(hello, |name: String| format!("hello, {name}")),
        Directive::case(bye, |name: String| format!("bye, {name}")),
        Directive::default(|name: String| format!("?, {name}")),
    ]
}

#[test]
fn test_hashed_backend() {
    let table: DispatchTable<String, Greeting, HashedMap<String, BoxedCallable<Greeting>>> =
        DispatchTable::new(greetings("hi".to_string(), "bye".to_string()));

    assert_eq!(table.resolve(&"hi".to_string(), ("ann".to_string(),)), "hello, ann");
    assert_eq!(table.resolve(&"bye".to_string(), ("bo".to_string(),)), "bye, bo");
    assert_eq!(table.resolve(&"yo".to_string(), ("cy".to_string(),)), "?, cy");
}

#[test]
fn test_sorted_backend_with_natural_order() {
    let table: DispatchTable<u16, Greeting, SortedMap<u16, BoxedCallable<Greeting>>> =
        DispatchTable::new(greetings(200, 100));

    assert_eq!(table.resolve(&200, ("ann".to_string(),)), "hello, ann");
    assert_eq!(table.resolve(&100, ("bo".to_string(),)), "bye, bo");
    assert_eq!(table.resolve(&300, ("cy".to_string(),)), "?, cy");
}

struct CaseInsensitive;

impl KeyOrder<String> for CaseInsensitive {
    fn compare(a: &String, b: &String) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

type CaseInsensitiveTable =
    DispatchTable<String, Greeting, SortedMap<String, BoxedCallable<Greeting>, CaseInsensitive>>;

#[test]
fn test_caller_supplied_ordering() {
    let table: CaseInsensitiveTable =
        DispatchTable::new(greetings("Hello".to_string(), "Bye".to_string()));

    assert_eq!(table.resolve(&"HELLO".to_string(), ("ann".to_string(),)), "hello, ann");
    assert_eq!(table.resolve(&"bye".to_string(), ("bo".to_string(),)), "bye, bo");
}

#[test]
fn test_caller_supplied_ordering_detects_duplicates() {
    let result = CaseInsensitiveTable::try_from_directives(greetings(
        "same".to_string(),
        "SAME".to_string(),
    ));

    assert!(matches!(
        result,
        Err(BuildError::DuplicateKey { position: 1 })
    ));
}

#[test]
fn test_backend_sizes_follow_inserts() {
    use switchyard::{
        CaseMapBuilder,
        maps::{HashedMapBuilder, OrderedMapBuilder, SortedMapBuilder},
    };

    let hashed = HashedMapBuilder::<u8, &str>::default().build();
    let ordered = OrderedMapBuilder::<u8, &str>::default().build();
    let sorted = SortedMapBuilder::<u8, &str>::default().build();
    assert!(hashed.is_empty() && ordered.is_empty() && sorted.is_empty());

    let mut hashed = HashedMapBuilder::default();
    let mut ordered = OrderedMapBuilder::default();
    let mut sorted = SortedMapBuilder::<_, _>::default();
    for (key, value) in [(3u8, "c"), (1, "a"), (3, "again")] {
        hashed.insert(key, value);
        ordered.insert(key, value);
        sorted.insert(key, value);
    }

    let (hashed, ordered, sorted) = (hashed.build(), ordered.build(), sorted.build());
    assert_eq!((hashed.len(), ordered.len(), sorted.len()), (2, 2, 2));
    assert!(!hashed.is_empty() && !ordered.is_empty() && !sorted.is_empty());
}
