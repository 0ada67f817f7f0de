use composable_indexes::{hashtable_multi, hashtable_unique, keys, premap, Collection};

#[derive(Debug, Clone)]
struct User {
    email: String,
    plan: String,
}

fn user(email: &str, plan: &str) -> User {
    User {
        email: email.to_string(),
        plan: plan.to_string(),
    }
}

#[test]
fn unique_lookup_and_absence() {
    let mut col = Collection::new(premap(|u: &User| u.email.clone(), hashtable_unique()));
    let a = col.insert(user("ada@example.com", "pro"));
    let b = col.insert(user("grace@example.com", "basic"));

    // `get` answers with the full item envelope, `get_id` with the bare id.
    let ada = col.query(|ix| {
        ix.get(&"ada@example.com".to_string())
            .map(|(id, u)| (id, u.plan.clone()))
    });
    assert_eq!(ada, Some((a, "pro".to_string())));
    assert_eq!(col.query(|ix| ix.get_id(&"grace@example.com".to_string())), Some(b));
    assert!(col.query(|ix| ix.get(&"missing@example.com".to_string())).is_none());
    assert_eq!(col.query(|ix| ix.count()), 2);
}

#[test]
#[should_panic(expected = "uniqueness constraint violated")]
fn unique_duplicate_add_panics() {
    let mut col = Collection::new(premap(|u: &User| u.email.clone(), hashtable_unique()));
    col.insert(user("ada@example.com", "pro"));
    col.insert(user("ada@example.com", "basic"));
}

#[test]
#[should_panic(expected = "uniqueness constraint violated")]
fn unique_update_into_occupied_key_panics() {
    let mut col = Collection::new(premap(|u: &User| u.email.clone(), hashtable_unique()));
    col.insert(user("ada@example.com", "pro"));
    let b = col.insert(user("grace@example.com", "basic"));
    col.update(b, user("ada@example.com", "basic"));
}

#[test]
fn unique_update_rehomes_the_key() {
    let mut col = Collection::new(premap(|u: &User| u.email.clone(), hashtable_unique()));
    let a = col.insert(user("ada@example.com", "pro"));

    col.adjust(a, |u| User {
        email: "lovelace@example.com".to_string(),
        plan: u.plan.clone(),
    });

    assert_eq!(col.query(|ix| ix.get_id(&"ada@example.com".to_string())), None);
    assert_eq!(col.query(|ix| ix.get_id(&"lovelace@example.com".to_string())), Some(a));
}

#[test]
fn unique_key_is_freed_by_remove() {
    let mut col = Collection::new(premap(|u: &User| u.email.clone(), hashtable_unique()));
    let a = col.insert(user("ada@example.com", "pro"));
    col.remove(a);

    let b = col.insert(user("ada@example.com", "basic"));
    assert_eq!(col.query(|ix| ix.get_id(&"ada@example.com".to_string())), Some(b));
    assert_eq!(col.query(|ix| ix.count()), 1);
}

#[test]
fn multi_groups_ids_per_key() {
    let mut col = Collection::new(premap(|u: &User| u.plan.clone(), hashtable_multi()));
    let a = col.insert(user("ada@example.com", "pro"));
    let b = col.insert(user("grace@example.com", "basic"));
    let c = col.insert(user("edsger@example.com", "pro"));

    assert_eq!(col.query(|ix| ix.get_ids(&"pro".to_string()).collect::<Vec<_>>()), vec![a, c]);
    assert_eq!(col.query(|ix| ix.get_ids(&"basic".to_string()).collect::<Vec<_>>()), vec![b]);
    assert_eq!(col.query(|ix| ix.get(&"trial".to_string()).count()), 0);
    assert_eq!(col.query(|ix| ix.count()), 3);

    // Envelopes resolve back to the full items.
    let pro_emails = col.query(|ix| {
        ix.get(&"pro".to_string())
            .map(|(_, u)| u.email.clone())
            .collect::<Vec<_>>()
    });
    assert_eq!(pro_emails, vec!["ada@example.com".to_string(), "edsger@example.com".to_string()]);
}

#[test]
fn multi_maintenance_on_update_and_remove() {
    let mut col = Collection::new(premap(|u: &User| u.plan.clone(), hashtable_multi()));
    let a = col.insert(user("ada@example.com", "pro"));
    let b = col.insert(user("grace@example.com", "pro"));

    col.adjust(b, |u| User {
        email: u.email.clone(),
        plan: "basic".to_string(),
    });
    assert_eq!(col.query(|ix| ix.get_ids(&"pro".to_string()).collect::<Vec<_>>()), vec![a]);
    assert_eq!(col.query(|ix| ix.get_ids(&"basic".to_string()).collect::<Vec<_>>()), vec![b]);

    col.remove(a);
    assert!(!col.query(|ix| ix.contains_key(&"pro".to_string())));
    assert_eq!(col.query(|ix| ix.count()), 1);
}

#[test]
fn keys_tracks_membership() {
    let mut col: Collection<i32, _> = Collection::new(keys());
    let a = col.insert(10);
    let b = col.insert(20);

    assert!(col.query(|ix| ix.contains(a)));
    assert_eq!(col.query(|ix| ix.iter().collect::<Vec<_>>()), vec![a, b]);
    assert_eq!(col.query(|ix| ix.count()), 2);

    // Updates do not change membership.
    col.update(b, 25);
    assert_eq!(col.query(|ix| ix.count()), 2);
    let values = col.query(|ix| ix.items().map(|(_, value)| *value).collect::<Vec<_>>());
    assert_eq!(values, vec![10, 25]);

    col.remove(a);
    assert!(!col.query(|ix| ix.contains(a)));
    assert_eq!(col.query(|ix| ix.iter().collect::<Vec<_>>()), vec![b]);
}
