//! Integration tests for the transaction store and its views.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use reply_core::store::matches_view;
use reply_core::{
    AccountDirectory, AccountId, Error, Mailbox, Transaction, TransactionId, TransactionStore,
};

fn ids(snapshot: &[Transaction]) -> Vec<u64> {
    snapshot.iter().map(|t| t.id.0).collect()
}

#[test]
fn test_starred_inbox_record_is_in_both_views() {
    let store = TransactionStore::seeded();
    assert!(ids(&store.snapshot(Mailbox::Inbox)).contains(&0));
    assert!(ids(&store.snapshot(Mailbox::Starred)).contains(&0));
}

#[test]
fn test_trashed_seed_record_is_only_in_trash() {
    let store = TransactionStore::seeded();
    for mailbox in Mailbox::ALL {
        let present = ids(&store.snapshot(mailbox)).contains(&8);
        assert_eq!(present, mailbox == Mailbox::Trash, "{mailbox}");
    }
}

#[test]
fn test_views_are_stable_without_mutation() {
    let store = TransactionStore::seeded();
    let view = store.view(Mailbox::Sent);
    assert_eq!(view.current(), view.current());
    assert_eq!(view.current(), store.snapshot(Mailbox::Sent));
    assert!(!view.has_changed());
}

#[test]
fn test_delete_is_visible_to_subscribers_before_returning() {
    let mut store = TransactionStore::seeded();
    let mut inbox = store.view(Mailbox::Inbox);
    let mut trash = store.view(Mailbox::Trash);
    let spam = store.view(Mailbox::Spam);

    assert!(store.delete(TransactionId(7)));

    assert!(inbox.has_changed());
    assert!(!ids(&inbox.take()).contains(&7));
    assert!(!inbox.has_changed());
    assert_eq!(ids(&trash.take()), vec![7, 8, 10]);
    // Every view is republished, even ones whose contents did not change.
    assert!(spam.has_changed());
    assert_eq!(ids(&spam.current()), vec![10]);
}

#[test]
fn test_delete_matches_update_to_trash() {
    let mut deleted = TransactionStore::seeded();
    let mut updated = TransactionStore::seeded();
    deleted.delete(TransactionId(4));
    updated.update(TransactionId(4), |t| t.mailbox = Mailbox::Trash);

    assert_eq!(
        deleted.subscribe_all().current(),
        updated.subscribe_all().current()
    );
    assert_eq!(deleted.revision(), updated.revision());
}

#[test]
fn test_missing_id_leaves_subscribers_untouched() {
    let mut store = TransactionStore::seeded();
    let all = store.subscribe_all();
    assert!(!store.delete(TransactionId(999)));
    assert!(!store.set_starred(TransactionId(999), true));
    assert!(!all.has_changed());
    assert_eq!(store.revision(), 0);
}

#[test]
fn test_starring_moves_record_into_starred_view_only() {
    let mut store = TransactionStore::seeded();
    store.set_starred(TransactionId(9), true);
    assert_eq!(ids(&store.snapshot(Mailbox::Starred)), vec![0, 2, 4, 9]);
    assert_eq!(ids(&store.snapshot(Mailbox::Drafts)), vec![9]);

    store.set_starred(TransactionId(0), false);
    assert_eq!(ids(&store.snapshot(Mailbox::Starred)), vec![2, 4, 9]);
    assert!(ids(&store.snapshot(Mailbox::Inbox)).contains(&0));
}

#[test]
fn test_reply_then_insert_is_retrievable() {
    let mut store = TransactionStore::seeded();
    let reply = store
        .create_reply_to(TransactionId(1))
        .in_mailbox(Mailbox::Drafts);
    let id = reply.id;
    assert!(store.get(id).is_none());

    store.insert(reply);
    let saved = store.require(id).unwrap();
    assert_eq!(saved.subject, "Brunch this weekend?");
    assert_eq!(saved.recipients[0].name, "Ali Connors");
    assert_eq!(*store.snapshot(Mailbox::Drafts).last().unwrap(), *saved);
}

#[test]
fn test_custom_directory_sender_for_blank_drafts() {
    let directory = AccountDirectory::new(
        vec![reply_core::Account::new(100, "Casey", "casey@example.com", "")],
        Vec::new(),
    )
    .unwrap();
    let store = TransactionStore::new(directory, Vec::new());
    assert!(store.is_empty());
    assert_eq!(store.create().sender.id, AccountId(100));
    assert!(store.snapshot(Mailbox::Inbox).is_empty());
    assert!(matches!(
        store.require(TransactionId(0)),
        Err(Error::TransactionNotFound(_))
    ));
}

#[tokio::test]
async fn test_changed_wakes_on_publish() {
    let mut store = TransactionStore::seeded();
    let mut starred = store.view(Mailbox::Starred);

    let waiter = tokio::spawn(async move { starred.changed().await.map(|s| ids(&s)) });
    tokio::task::yield_now().await;
    store.set_starred(TransactionId(1), true);

    assert_eq!(waiter.await.unwrap().unwrap(), vec![0, 1, 2, 4]);
}

#[tokio::test]
async fn test_changed_fails_once_store_is_dropped() {
    let store = TransactionStore::seeded();
    let mut inbox = store.view(Mailbox::Inbox);
    drop(store);
    assert!(matches!(inbox.changed().await, Err(Error::StoreClosed)));
    assert_eq!(inbox.current().len(), 6);
}

fn arb_transaction() -> impl Strategy<Value = (u64, bool, usize)> {
    (0u64..20, any::<bool>(), 0usize..5)
}

const STORABLE: [Mailbox; 5] = [
    Mailbox::Inbox,
    Mailbox::Sent,
    Mailbox::Trash,
    Mailbox::Spam,
    Mailbox::Drafts,
];

proptest! {
    #[test]
    fn test_views_filter_and_keep_master_order(
        records in prop::collection::vec(arb_transaction(), 0..40),
        deletes in prop::collection::vec(0u64..20, 0..10),
    ) {
        let directory = AccountDirectory::seeded();
        let sender = directory.default_user().clone();
        let transactions: Vec<Transaction> = records
            .iter()
            .map(|&(id, starred, mailbox)| {
                Transaction::new(TransactionId(id), sender.clone())
                    .starred(starred)
                    .in_mailbox(STORABLE[mailbox])
            })
            .collect();
        let mut store = TransactionStore::new(directory, transactions);
        for id in deletes {
            store.delete(TransactionId(id));
        }

        let all = store.subscribe_all().current();
        for mailbox in Mailbox::ALL {
            let expected: Vec<Transaction> = all
                .iter()
                .filter(|t| matches_view(t, mailbox))
                .cloned()
                .collect();
            prop_assert_eq!(store.snapshot(mailbox).to_vec(), expected);
        }
    }
}
