use crate::Inventory;
use crate::scoring::Factor::{Cl, Co, Gu, Ob, Sd, Val};
use crate::scoring::{Code, CodeItems, FactorGroup, TestType};

/// IBPI 청소년용. Youth form: 103 items.
pub struct YouthInventory;

/// 1-based question numbers scored as `5 - score`.
const REVERSE_ITEMS: &[usize] = &[
    22, 23, 27, 31, 33, 34, 36, 43, 47, 55, 59, 62, 63, 64, 71, 77, 79, 87, 89, 97, 98, 101,
    102, 103,
];

/// 1-based question number and the raw score (1-4) that marks a consistent answer.
const VALIDITY_ITEMS: &[(usize, u8)] = &[
    (9, 4), (24, 1), (38, 3), (52, 1), (67, 4), (81, 1), (96, 4),
];

const CODES: &[CodeItems] = &[
    CodeItems {
        code: Code::new(Cl, 1),
        items: &[15, 49, 73, 74],
    },
    CodeItems {
        code: Code::new(Cl, 2),
        items: &[1, 4, 10, 78],
    },
    CodeItems {
        code: Code::new(Cl, 3),
        items: &[30, 34, 52, 99],
    },
    CodeItems {
        code: Code::new(Cl, 4),
        items: &[9, 14, 20, 39],
    },
    CodeItems {
        code: Code::new(Cl, 5),
        items: &[33, 47, 50, 88],
    },
    CodeItems {
        code: Code::new(Co, 1),
        items: &[25, 76, 81, 86],
    },
    CodeItems {
        code: Code::new(Co, 2),
        items: &[46, 56, 70, 89],
    },
    CodeItems {
        code: Code::new(Co, 3),
        items: &[13, 31, 69, 85],
    },
    CodeItems {
        code: Code::new(Co, 4),
        items: &[0, 43, 54, 102],
    },
    CodeItems {
        code: Code::new(Co, 5),
        items: &[27, 58, 61, 97],
    },
    CodeItems {
        code: Code::new(Gu, 1),
        items: &[22, 32, 57, 96],
    },
    CodeItems {
        code: Code::new(Gu, 2),
        items: &[5, 11, 17, 40],
    },
    CodeItems {
        code: Code::new(Gu, 3),
        items: &[26, 38, 79, 82],
    },
    CodeItems {
        code: Code::new(Gu, 4),
        items: &[12, 42, 91, 92],
    },
    CodeItems {
        code: Code::new(Gu, 5),
        items: &[16, 83, 87, 100],
    },
    CodeItems {
        code: Code::new(Ob, 1),
        items: &[2, 19, 21, 59],
    },
    CodeItems {
        code: Code::new(Ob, 2),
        items: &[35, 48, 63, 101],
    },
    CodeItems {
        code: Code::new(Ob, 3),
        items: &[7, 28, 93, 94],
    },
    CodeItems {
        code: Code::new(Ob, 4),
        items: &[6, 64, 72, 84],
    },
    CodeItems {
        code: Code::new(Ob, 5),
        items: &[65, 68, 71, 90],
    },
    CodeItems {
        code: Code::new(Sd, 1),
        items: &[29, 41, 55, 98],
    },
    CodeItems {
        code: Code::new(Sd, 2),
        items: &[24, 62, 77],
    },
    CodeItems {
        code: Code::new(Sd, 3),
        items: &[3, 44, 67],
    },
    CodeItems {
        code: Code::new(Sd, 4),
        items: &[18, 36, 75],
    },
    CodeItems {
        code: Code::new(Sd, 5),
        items: &[45, 53, 60],
    },
    CodeItems {
        code: Code::new(Val, 1),
        items: &[8, 23, 37, 51, 66, 80, 95],
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

impl Inventory for YouthInventory {
    fn test_type(&self) -> TestType {
        TestType::Youth
    }

    fn name(&self) -> &str {
        "IBPI 청소년용"
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
