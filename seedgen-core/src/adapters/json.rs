//! JSON fixture files
//!
//! One pretty-printed document per collection. serde_json writes non-ASCII
//! characters literally, so names like "Salário" stay readable.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::SeedSet;
use crate::ports::{SeedWriter, WrittenFile};

pub const USER_FILE: &str = "user.json";
pub const WALLETS_FILE: &str = "wallets.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const TAGS_FILE: &str = "tags.json";
pub const RECURRING_FILE: &str = "recurring.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const GROUPS_FILE: &str = "groups.json";
pub const MEMBERS_FILE: &str = "members.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Writes and reads fixture sets as a directory of JSON files
pub struct JsonSeedStore {
    dir: PathBuf,
}

impl JsonSeedStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_document<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        file_name: &str,
        value: &T,
        records: usize,
    ) -> Result<WrittenFile> {
        let path = self.dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(WrittenFile {
            collection: collection.to_string(),
            path,
            records,
        })
    }

    fn read_document<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Err(Error::not_found(format!("{}", path.display())));
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load a previously written fixture set back into memory
    pub fn load(&self) -> Result<SeedSet> {
        Ok(SeedSet {
            user: self.read_document(USER_FILE)?,
            wallets: self.read_document(WALLETS_FILE)?,
            categories: self.read_document(CATEGORIES_FILE)?,
            tags: self.read_document(TAGS_FILE)?,
            recurring: self.read_document(RECURRING_FILE)?,
            transactions: self.read_document(TRANSACTIONS_FILE)?,
            groups: self.read_document(GROUPS_FILE)?,
            members: self.read_document(MEMBERS_FILE)?,
            accounts: self.read_document(ACCOUNTS_FILE)?,
        })
    }
}

impl SeedWriter for JsonSeedStore {
    fn location(&self) -> PathBuf {
        self.dir.clone()
    }

    fn write(&self, seeds: &SeedSet) -> Result<Vec<WrittenFile>> {
        std::fs::create_dir_all(&self.dir)?;

        Ok(vec![
            self.write_document("user", USER_FILE, &seeds.user, 1)?,
            self.write_document("wallets", WALLETS_FILE, &seeds.wallets, seeds.wallets.len())?,
            self.write_document(
                "categories",
                CATEGORIES_FILE,
                &seeds.categories,
                seeds.categories.len(),
            )?,
            self.write_document("tags", TAGS_FILE, &seeds.tags, seeds.tags.len())?,
            self.write_document(
                "recurring",
                RECURRING_FILE,
                &seeds.recurring,
                seeds.recurring.len(),
            )?,
            self.write_document(
                "transactions",
                TRANSACTIONS_FILE,
                &seeds.transactions,
                seeds.transactions.len(),
            )?,
            self.write_document("groups", GROUPS_FILE, &seeds.groups, seeds.groups.len())?,
            self.write_document("members", MEMBERS_FILE, &seeds.members, seeds.members.len())?,
            self.write_document(
                "accounts",
                ACCOUNTS_FILE,
                &seeds.accounts,
                seeds.accounts.len(),
            )?,
        ])
    }
}
