//! Demo transactions loaded into a freshly seeded store.

use crate::account::{AccountDirectory, AccountId};
use crate::transaction::{Mailbox, Transaction, TransactionAttachment, TransactionId};

/// Folder labels shown in the navigation menu.
pub const FOLDERS: [&str; 6] = [
    "Receipts",
    "Pine Elementary",
    "Taxes",
    "Vacation",
    "Mortgage",
    "Grocery coupons",
];

/// Builds the fixed seed list.
///
/// Two records intentionally share id 10.
#[must_use]
pub fn transactions(directory: &AccountDirectory) -> Vec<Transaction> {
    let me = || vec![directory.default_user().clone()];
    let from = |id: u64| directory.contact_or_default(AccountId(id)).clone();
    let message = |id: u64, sender: u64| Transaction::new(TransactionId(id), from(sender));

    vec![
        message(0, 9)
            .with_recipients(me())
            .with_content(
                "Package shipped!",
                "Cucumber Mask Facial has shipped.\n\n\
                 Keep an eye out for a package to arrive between this Thursday and next \
                 Tuesday. If for any reason you don't receive your package before the end of \
                 next week, please reach out to us for details on your shipment.\n\n\
                 As always, thank you for shopping with us and we hope you love our specially \
                 formulated Cucumber Mask!",
            )
            .starred(true),
        message(1, 6).with_recipients(me()).with_content(
            "Brunch this weekend?",
            "I'll be in your neighborhood doing errands and was hoping to catch you for a \
             coffee this Saturday. If you don't have anything scheduled, it would be great to \
             see you! It feels like its been forever.\n\n\
             If we do get a chance to get together, remind me to tell you about Kim. She \
             stopped over at the house to say hey to the kids and told me all about her trip \
             to Mexico.\n\n\
             Talk to you soon,\n\n\
             Ali",
        ),
        message(2, 5)
            .with_recipients(me())
            .with_content("Bonjour from Paris", "Here are some great shots from my trip...")
            .with_attachments(vec![
                TransactionAttachment::new("paris_1", "Bridge in Paris"),
                TransactionAttachment::new("paris_2", "Bridge in Paris at night"),
                TransactionAttachment::new("paris_3", "City street in Paris"),
                TransactionAttachment::new("paris_4", "Street with bike in Paris"),
            ])
            .starred(true),
        message(3, 8)
            .with_recipients(me())
            .with_content(
                "High school reunion?",
                "Hi friends,\n\n\
                 I was at the grocery store on Sunday night.. when I ran into Genie Williams! \
                 I almost didn't recognize her afer 20 years!\n\n\
                 Anyway, it turns out she is on the organizing committee for the high school \
                 reunion this fall. I don't know if you were planning on going or not, but she \
                 could definitely use our help in trying to track down lots of missing alums. \
                 If you can make it, we're doing a little phone-tree party at her place next \
                 Saturday, hoping that if we can find one person, thee more will...",
            )
            .in_mailbox(Mailbox::Sent),
        message(4, 11)
            .with_recipients(vec![
                directory.default_user().clone(),
                from(8),
                from(5),
            ])
            .with_content(
                "Brazil trip",
                "Thought we might be able to go over some details about our upcoming \
                 vacation.\n\n\
                 I've been doing a bit of research and have come across a few paces in \
                 Northern Brazil that I think we should check out. One, the north has some of \
                 the most predictable wind on the planet. I'd love to get out on the ocean and \
                 kitesurf for a couple of days if we're going to be anywhere near or around \
                 Taiba. I hear it's beautiful there and if you're up for it, I'd love to go. \
                 Other than that, I haven't spent too much time looking into places along our \
                 road trip route. I'm assuming we can find places to stay and things to do as \
                 we drive and find places we think look interesting. But... I know you're more \
                 of a planner, so if you have ideas or places in mind, lets jot some ideas \
                 down!\n\n\
                 Maybe we can jump on the phone later today if you have a second.",
            )
            .starred(true),
        message(5, 13)
            .with_recipients(me())
            .with_content("Update to Your Itinerary", ""),
        message(6, 10)
            .with_recipients(me())
            .with_content(
                "Recipe to try",
                "Raspberry Pie: We should make this pie recipe tonight! The filling is very \
                 quick to put together.",
            )
            .in_mailbox(Mailbox::Sent),
        message(7, 9)
            .with_recipients(me())
            .with_content("Delivered", "Your shoes should be waiting for you at home!"),
        message(8, 13)
            .with_recipients(me())
            .with_content(
                "Your update on Google Play Store is live!",
                "Your update, 0.1.1, is now live on the Play Store and available for your \
                 alpha users to start testing.\n\n\
                 Your alpha testers will be automatically notified. If you'd rather send them \
                 a link directly, go to your Google Play Console and follow the instructions \
                 for obtaining an open alpha testing link.",
            )
            .in_mailbox(Mailbox::Trash),
        message(9, 10)
            .with_recipients(me())
            .with_content(
                "(No subject)",
                "Hey, \n\nWanted to email and see what you thought of",
            )
            .in_mailbox(Mailbox::Drafts),
        message(10, 5)
            .with_recipients(me())
            .with_content(
                "Try a free TrailGo account",
                "Looking for the best hiking trails in your area? TrailGo gets you on the \
                 path to the outdoors faster than you can pack a sandwich. \n\n\
                 Whether you're an experienced hiker or just looking to get outside for the \
                 afternoon, there's a segment that suits you.",
            )
            .in_mailbox(Mailbox::Trash),
        message(10, 5)
            .with_recipients(me())
            .with_content(
                "Free money",
                "You've been selected as a winner in our latest raffle! To claim your prize, \
                 click on the link.",
            )
            .in_mailbox(Mailbox::Spam),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let directory = AccountDirectory::seeded();
        let seed = transactions(&directory);
        assert_eq!(seed.len(), 12);
        assert!(seed.iter().all(|t| !t.recipients.is_empty()));
        assert!(seed.iter().all(|t| t.mailbox != Mailbox::Starred));
        assert_eq!(seed.iter().filter(|t| t.id == TransactionId(10)).count(), 2);
    }

    #[test]
    fn test_seed_bodies_keep_trailing_spaces() {
        let directory = AccountDirectory::seeded();
        let seed = transactions(&directory);
        assert!(seed[9].body.starts_with("Hey, \n\n"));
        assert!(seed[10].body.contains("pack a sandwich. \n\n"));
    }

    #[test]
    fn test_seed_senders_resolve_to_contacts() {
        let directory = AccountDirectory::seeded();
        let seed = transactions(&directory);
        assert_eq!(seed[1].sender.name, "Ali Connors");
        assert_eq!(seed[0].sender.name, "Google Express");
        assert!(seed.iter().all(|t| !directory.is_user_account(t.sender.id)));
    }
}
