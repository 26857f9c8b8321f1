// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

use crate::editor::TransactionForm;
use crate::errors::Result;
use crate::models::{Category, FamilyMember, MemberRole, TransactionType};
use crate::store::{LedgerPatch, LedgerStore};

pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        ("1", "餐饮", "🍔", "bg-orange-500"),
        ("2", "购物", "🛍️", "bg-pink-500"),
        ("3", "交通", "🚗", "bg-blue-500"),
        ("4", "住房", "🏠", "bg-indigo-500"),
        ("5", "娱乐", "🎮", "bg-purple-500"),
        ("6", "医疗", "🏥", "bg-red-500"),
        ("7", "教育", "📚", "bg-teal-500"),
        ("8", "工资", "💰", "bg-green-500"),
        ("9", "奖金", "🏆", "bg-yellow-500"),
        ("10", "其他", "✨", "bg-gray-500"),
    ]
    .into_iter()
    .map(|(id, name, icon, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
});

/// Every new ledger starts with this single Admin member.
pub fn default_member() -> FamilyMember {
    FamilyMember {
        id: "m1".to_string(),
        name: "我".to_string(),
        role: MemberRole::Admin,
        avatar: "https://picsum.photos/seed/user1/100/100".to_string(),
    }
}

pub fn family_members() -> Vec<FamilyMember> {
    vec![
        default_member(),
        FamilyMember {
            id: "m2".to_string(),
            name: "另一半".to_string(),
            role: MemberRole::Member,
            avatar: "https://picsum.photos/seed/user2/100/100".to_string(),
        },
        FamilyMember {
            id: "m3".to_string(),
            name: "孩子".to_string(),
            role: MemberRole::Member,
            avatar: "https://picsum.photos/seed/user3/100/100".to_string(),
        },
    ]
}

/// Builds the session store: one family ledger holding the sample
/// members and transactions. State lives only for this session.
pub fn bootstrap() -> Result<LedgerStore> {
    let mut store = LedgerStore::new();
    store.create_ledger("家庭账本", "🏠", "一家人的日常收支")?;
    store.update_active(LedgerPatch {
        members: Some(family_members()),
        ..Default::default()
    });

    // Entered oldest-first so the history lists newest-first.
    let samples = [
        ("3500", TransactionType::Expense, "住房", "房租", "m2"),
        ("12000", TransactionType::Income, "工资", "月度工资", "m1"),
        ("50", TransactionType::Expense, "餐饮", "早餐", "m1"),
    ];
    for (amount, kind, category, description, member_id) in samples {
        store.submit(
            &TransactionForm {
                amount: amount.to_string(),
                r#type: kind,
                category: category.to_string(),
                description: description.to_string(),
                member_id: member_id.to_string(),
            },
            None,
        )?;
    }
    Ok(store)
}
