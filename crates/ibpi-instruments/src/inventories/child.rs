use crate::Inventory;
use crate::scoring::Factor::{Cl, Co, Gu, Ob, Sd, Val};
use crate::scoring::{Code, CodeItems, FactorGroup, TestType};

/// IBPI 아동용. Child form: 95 items.
pub struct ChildInventory;

/// 1-based question numbers scored as `5 - score`.
const REVERSE_ITEMS: &[usize] = &[
    4, 7, 10, 13, 25, 26, 30, 31, 36, 44, 45, 53, 57, 59, 60, 61, 65, 74, 82, 83, 84, 87,
];

/// 1-based question number and the raw score (1-4) that marks a consistent answer.
const VALIDITY_ITEMS: &[(usize, u8)] = &[
    (11, 4), (29, 1), (46, 4), (63, 2), (78, 4), (92, 1),
];

const CODES: &[CodeItems] = &[
    CodeItems {
        code: Code::new(Cl, 1),
        items: &[64, 73, 80, 84],
    },
    CodeItems {
        code: Code::new(Cl, 2),
        items: &[17, 34, 79, 89],
    },
    CodeItems {
        code: Code::new(Cl, 3),
        items: &[37, 44, 59, 87],
    },
    CodeItems {
        code: Code::new(Cl, 4),
        items: &[4, 39, 49, 81],
    },
    CodeItems {
        code: Code::new(Cl, 5),
        items: &[7, 38, 47, 54],
    },
    CodeItems {
        code: Code::new(Co, 1),
        items: &[6, 19, 69, 85],
    },
    CodeItems {
        code: Code::new(Co, 2),
        items: &[11, 23, 40, 56],
    },
    CodeItems {
        code: Code::new(Co, 3),
        items: &[43, 51, 78, 92],
    },
    CodeItems {
        code: Code::new(Co, 4),
        items: &[21, 22, 55, 61],
    },
    CodeItems {
        code: Code::new(Co, 5),
        items: &[1, 32, 48, 83],
    },
    CodeItems {
        code: Code::new(Gu, 1),
        items: &[8, 13, 33, 86],
    },
    CodeItems {
        code: Code::new(Gu, 2),
        items: &[16, 46, 50, 88],
    },
    CodeItems {
        code: Code::new(Gu, 3),
        items: &[63, 65, 71, 94],
    },
    CodeItems {
        code: Code::new(Gu, 4),
        items: &[12, 29, 52, 68],
    },
    CodeItems {
        code: Code::new(Gu, 5),
        items: &[35, 66, 74],
    },
    CodeItems {
        code: Code::new(Ob, 1),
        items: &[58, 70, 75],
    },
    CodeItems {
        code: Code::new(Ob, 2),
        items: &[0, 3, 72],
    },
    CodeItems {
        code: Code::new(Ob, 3),
        items: &[36, 53, 67],
    },
    CodeItems {
        code: Code::new(Ob, 4),
        items: &[5, 25, 76],
    },
    CodeItems {
        code: Code::new(Ob, 5),
        items: &[18, 26, 57],
    },
    CodeItems {
        code: Code::new(Sd, 1),
        items: &[15, 30, 82],
    },
    CodeItems {
        code: Code::new(Sd, 2),
        items: &[14, 27, 93],
    },
    CodeItems {
        code: Code::new(Sd, 3),
        items: &[9, 24, 31],
    },
    CodeItems {
        code: Code::new(Sd, 4),
        items: &[42, 60, 90],
    },
    CodeItems {
        code: Code::new(Sd, 5),
        items: &[2, 20, 41],
    },
    CodeItems {
        code: Code::new(Val, 1),
        items: &[10, 28, 45, 62, 77, 91],
    },
];

const FACTOR_GROUPS: &[FactorGroup] = &[
    FactorGroup {
        factor: Cl,
        codes: &[
            Code::new(Cl, 1),
            Code::new(Cl, 2),
            Code::new(Cl, 3),
            Code::new(Cl, 4),
            Code::new(Cl, 5),
        ],
    },
    FactorGroup {
        factor: Co,
        codes: &[
            Code::new(Co, 1),
            Code::new(Co, 2),
            Code::new(Co, 3),
            Code::new(Co, 4),
            Code::new(Co, 5),
        ],
    },
    FactorGroup {
        factor: Gu,
        codes: &[
            Code::new(Gu, 1),
            Code::new(Gu, 2),
            Code::new(Gu, 3),
            Code::new(Gu, 4),
            Code::new(Gu, 5),
        ],
    },
    FactorGroup {
        factor: Ob,
        codes: &[
            Code::new(Ob, 1),
            Code::new(Ob, 2),
            Code::new(Ob, 3),
            Code::new(Ob, 4),
            Code::new(Ob, 5),
        ],
    },
    FactorGroup {
        factor: Sd,
        codes: &[
            Code::new(Sd, 1),
            Code::new(Sd, 2),
            Code::new(Sd, 3),
            Code::new(Sd, 4),
            Code::new(Sd, 5),
        ],
    },
    FactorGroup {
        factor: Val,
        codes: &[Code::new(Val, 1)],
    },
];

impl Inventory for ChildInventory {
    fn test_type(&self) -> TestType {
        TestType::Child
    }

    fn name(&self) -> &str {
        "IBPI 아동용"
    }

    fn reverse_items(&self) -> &'static [usize] {
        REVERSE_ITEMS
    }

    fn validity_items(&self) -> &'static [(usize, u8)] {
        VALIDITY_ITEMS
    }

    fn codes(&self) -> &'static [CodeItems] {
        CODES
    }

    fn factor_groups(&self) -> &'static [FactorGroup] {
        FACTOR_GROUPS
    }
}
