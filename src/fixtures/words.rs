//! Word lists backing the fixture generator.

pub const SURNAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡", "郭",
    "何", "林", "高", "罗",
];

pub const GIVEN_NAMES: &[&str] = &[
    "伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "军", "洋", "勇", "艳", "杰", "娟",
    "涛", "明", "超", "秀兰", "霞", "平", "刚", "桂英", "子涵", "浩然", "雨桐", "欣怡", "宇轩",
];

pub const JOB_TITLES: &[&str] = &[
    "主任医师",
    "副主任医师",
    "主治医师",
    "住院医师",
    "护士长",
    "主管护师",
    "软件工程师",
    "教师",
    "会计",
    "销售经理",
    "公务员",
    "自由职业",
];

pub const CITIES: &[&str] = &[
    "北京", "上海", "广州", "深圳", "杭州", "南京", "成都", "武汉", "西安", "重庆", "苏州", "天津",
    "长沙", "青岛", "厦门",
];

pub const STREETS: &[&str] = &[
    "中山路", "人民路", "解放路", "建设路", "和平路", "长江路", "新华路", "文化路", "胜利路", "青年路",
];

pub const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat",
];

pub const COMPANY_SUFFIXES: &[&str] = &["医疗集团", "健康管理有限公司", "肾病中心", "血液净化中心"];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Refined", "Modern",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Silk",
];

pub const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
];

pub const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "专业", "高效", "贴心", "便捷", "温馨", "先进", "规范", "安全", "舒适", "权威",
];

pub const CHEMICAL_ELEMENTS: &[&str] = &[
    "Sodium", "Potassium", "Calcium", "Phosphorus", "Magnesium", "Iron", "Zinc", "Chlorine",
    "Copper", "Selenium", "Nitrogen", "Carbon",
];

pub const HUMAN_COLORS: &[&str] = &[
    "red", "green", "blue", "yellow", "purple", "orange", "pink", "cyan", "magenta", "teal",
    "violet", "indigo", "gold", "silver", "lime",
];

pub const DOMAIN_SUFFIXES: &[&str] = &["com", "cn", "net", "org", "info"];

pub const UPPER_ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const LOWER_ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
