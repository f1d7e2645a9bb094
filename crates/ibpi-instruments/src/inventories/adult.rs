use crate::Inventory;
use crate::scoring::Factor::{Cl, Co, Gu, Ob, Sd, Val};
use crate::scoring::{Code, CodeItems, FactorGroup, TestType};

/// IBPI 성인용. Adult form: 107 items, six GU codes.
pub struct AdultInventory;

/// 1-based question numbers scored as `5 - score`.
const REVERSE_ITEMS: &[usize] = &[
    4, 7, 8, 11, 13, 21, 31, 34, 39, 42, 45, 52, 55, 57, 58, 64, 75, 78, 82, 84, 87, 89, 90, 101,
];

/// 1-based question number and the raw score (1-4) that marks a consistent answer.
const VALIDITY_ITEMS: &[(usize, u8)] = &[
    (12, 4), (27, 1), (41, 4), (56, 1), (70, 4), (85, 1), (99, 4), (106, 1),
];

const CODES: &[CodeItems] = &[
    CodeItems {
        code: Code::new(Cl, 1),
        items: &[14, 31, 65, 81],
    },
    CodeItems {
        code: Code::new(Cl, 2),
        items: &[17, 38, 74, 82],
    },
    CodeItems {
        code: Code::new(Cl, 3),
        items: &[7, 19, 48, 51],
    },
    CodeItems {
        code: Code::new(Cl, 4),
        items: &[10, 30, 39, 88],
    },
    CodeItems {
        code: Code::new(Cl, 5),
        items: &[3, 13, 24, 104],
    },
    CodeItems {
        code: Code::new(Co, 1),
        items: &[60, 87, 91, 96],
    },
    CodeItems {
        code: Code::new(Co, 2),
        items: &[25, 32, 54, 58],
    },
    CodeItems {
        code: Code::new(Co, 3),
        items: &[1, 5, 46, 78],
    },
    CodeItems {
        code: Code::new(Co, 4),
        items: &[35, 44, 99, 100],
    },
    CodeItems {
        code: Code::new(Co, 5),
        items: &[47, 59, 67, 97],
    },
    CodeItems {
        code: Code::new(Gu, 1),
        items: &[0, 36, 83, 94],
    },
    CodeItems {
        code: Code::new(Gu, 2),
        items: &[9, 50, 52, 89],
    },
    CodeItems {
        code: Code::new(Gu, 3),
        items: &[34, 49, 56, 71],
    },
    CodeItems {
        code: Code::new(Gu, 4),
        items: &[21, 27, 64, 70],
    },
    CodeItems {
        code: Code::new(Gu, 5),
        items: &[29, 41, 92, 93],
    },
    CodeItems {
        code: Code::new(Gu, 6),
        items: &[8, 72, 79, 101],
    },
    CodeItems {
        code: Code::new(Ob, 1),
        items: &[37, 77, 85, 95],
    },
    CodeItems {
        code: Code::new(Ob, 2),
        items: &[4, 43, 66, 102],
    },
    CodeItems {
        code: Code::new(Ob, 3),
        items: &[23, 28, 57, 86],
    },
    CodeItems {
        code: Code::new(Ob, 4),
        items: &[6, 16, 18, 42],
    },
    CodeItems {
        code: Code::new(Ob, 5),
        items: &[75, 80, 90, 106],
    },
    CodeItems {
        code: Code::new(Sd, 1),
        items: &[12, 61, 103],
    },
    CodeItems {
        code: Code::new(Sd, 2),
        items: &[33, 45, 73],
    },
    CodeItems {
        code: Code::new(Sd, 3),
        items: &[15, 68, 76],
    },
    CodeItems {
        code: Code::new(Sd, 4),
        items: &[2, 22, 63],
    },
    CodeItems {
        code: Code::new(Sd, 5),
        items: &[20, 53, 62],
    },
    CodeItems {
        code: Code::new(Val, 1),
        items: &[11, 26, 40, 55, 69, 84, 98, 105],
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
            Code::new(Gu, 6),
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

impl Inventory for AdultInventory {
    fn test_type(&self) -> TestType {
        TestType::Adult
    }

    fn name(&self) -> &str {
        "IBPI 성인용"
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
