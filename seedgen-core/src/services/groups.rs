//! Group, member and account sample synthesis

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::config::GeneratorConfig;
use crate::domain::{money_from_f64, Account, AccountKind, Group, Member};

/// Groups with the members and accounts that back-reference them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupSample {
    pub groups: Vec<Group>,
    pub members: Vec<Member>,
    pub accounts: Vec<Account>,
}

/// Generate `group_count` sequentially numbered groups
///
/// Per group: member count, then per account balance followed by kind.
pub fn synthesize_groups<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    currency: &str,
    rng: &mut R,
) -> GroupSample {
    let mut sample = GroupSample::default();

    for i in 1..=config.group_count {
        let group_id = format!("group-{:02}", i);
        sample.groups.push(Group {
            id: group_id.clone(),
            name: format!("Grupo {}", i),
            description: format!("Grupo de exemplo {}", i),
        });

        let member_count =
            rng.gen_range(config.members_per_group.min..=config.members_per_group.max);
        for m in 1..=member_count {
            sample.members.push(Member {
                id: Uuid::new_v4(),
                group_id: group_id.clone(),
                name: format!("Membro {}-{}", i, m),
                email: format!("m{}{}@exemplo.com", i, m),
            });
        }

        let account_count =
            rng.gen_range(config.accounts_per_group.min..=config.accounts_per_group.max);
        for a in 1..=account_count {
            let balance = money_from_f64(
                rng.gen_range(config.account_balance.min..=config.account_balance.max),
            );
            let kind = AccountKind::ALL[rng.gen_range(0..AccountKind::ALL.len())];
            sample.accounts.push(Account {
                id: Uuid::new_v4(),
                group_id: group_id.clone(),
                name: format!("Conta {}-{}", i, a),
                kind,
                balance,
                currency: currency.to_string(),
            });
        }
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    fn generate(seed: u64) -> GroupSample {
        let mut rng = StdRng::seed_from_u64(seed);
        synthesize_groups(&GeneratorConfig::default(), "BRL", &mut rng)
    }

    #[test]
    fn test_five_sequential_groups() {
        let sample = generate(42);
        let ids: Vec<_> = sample.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["group-01", "group-02", "group-03", "group-04", "group-05"]);
        assert_eq!(sample.groups[2].name, "Grupo 3");
        assert_eq!(sample.groups[2].description, "Grupo de exemplo 3");
    }

    #[test]
    fn test_member_and_account_counts_per_group() {
        for seed in 0..20 {
            let sample = generate(seed);
            for group in &sample.groups {
                let members = sample.members.iter().filter(|m| m.group_id == group.id).count();
                let accounts = sample.accounts.iter().filter(|a| a.group_id == group.id).count();
                assert!((2..=4).contains(&members), "seed {} group {}", seed, group.id);
                assert!((1..=2).contains(&accounts), "seed {} group {}", seed, group.id);
            }
            assert!(sample
                .members
                .iter()
                .all(|m| sample.groups.iter().any(|g| g.id == m.group_id)));
        }
    }

    #[test]
    fn test_member_naming() {
        let sample = generate(3);
        let first = &sample.members[0];
        assert_eq!(first.group_id, "group-01");
        assert_eq!(first.name, "Membro 1-1");
        assert_eq!(first.email, "m11@exemplo.com");
    }

    #[test]
    fn test_account_balances_in_range() {
        let low = Decimal::new(10000, 2);
        let high = Decimal::new(500000, 2);
        for seed in 0..20 {
            for account in generate(seed).accounts {
                assert!(account.balance >= low && account.balance <= high);
                assert_eq!(account.balance, account.balance.round_dp(2));
                assert_eq!(account.currency, "BRL");
            }
        }
    }

    #[test]
    fn test_same_seed_same_shape() {
        let shape = |s: GroupSample| {
            (
                s.members.into_iter().map(|m| (m.group_id, m.name)).collect::<Vec<_>>(),
                s.accounts
                    .into_iter()
                    .map(|a| (a.group_id, a.kind, a.balance))
                    .collect::<Vec<_>>(),
            )
        };
        assert_eq!(shape(generate(11)), shape(generate(11)));
    }
}
