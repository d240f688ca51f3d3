// Generated from Unicode 14.0.0 Blocks.txt. Do not edit.

pub(crate) static BLOCK_NAMES: &[Option<&str>] = &[
    Some("BasicLatin"),
    Some("Latin-1Supplement"),
    Some("LatinExtended-A"),
    Some("LatinExtended-B"),
    Some("IPAExtensions"),
    Some("SpacingModifierLetters"),
    Some("CombiningDiacriticalMarks"),
    Some("GreekandCoptic|Greek"),
    Some("Cyrillic"),
    Some("CyrillicSupplement"),
    Some("Armenian"),
    Some("Hebrew"),
    Some("Arabic"),
    Some("Syriac"),
    Some("ArabicSupplement"),
    Some("Thaana"),
    Some("NKo"),
    Some("Samaritan"),
    Some("Mandaic"),
    Some("SyriacSupplement"),
    Some("ArabicExtended-B"),
    Some("ArabicExtended-A"),
    Some("Devanagari"),
    Some("Bengali"),
    Some("Gurmukhi"),
    Some("Gujarati"),
    Some("Oriya"),
    Some("Tamil"),
    Some("Telugu"),
    Some("Kannada"),
    Some("Malayalam"),
    Some("Sinhala"),
    Some("Thai"),
    Some("Lao"),
    Some("Tibetan"),
    Some("Myanmar"),
    Some("Georgian"),
    Some("HangulJamo"),
    Some("Ethiopic"),
    Some("EthiopicSupplement"),
    Some("Cherokee"),
    Some("UnifiedCanadianAboriginalSyllabics"),
    Some("Ogham"),
    Some("Runic"),
    Some("Tagalog"),
    Some("Hanunoo"),
    Some("Buhid"),
    Some("Tagbanwa"),
    Some("Khmer"),
    Some("Mongolian"),
    Some("UnifiedCanadianAboriginalSyllabicsExtended"),
    Some("Limbu"),
    Some("TaiLe"),
    Some("NewTaiLue"),
    Some("KhmerSymbols"),
    Some("Buginese"),
    Some("TaiTham"),
    Some("CombiningDiacriticalMarksExtended"),
    Some("Balinese"),
    Some("Sundanese"),
    Some("Batak"),
    Some("Lepcha"),
    Some("OlChiki"),
    Some("CyrillicExtended-C"),
    Some("GeorgianExtended"),
    Some("SundaneseSupplement"),
    Some("VedicExtensions"),
    Some("PhoneticExtensions"),
    Some("PhoneticExtensionsSupplement"),
    Some("CombiningDiacriticalMarksSupplement"),
    Some("LatinExtendedAdditional"),
    Some("GreekExtended"),
    Some("GeneralPunctuation"),
    Some("SuperscriptsandSubscripts"),
    Some("CurrencySymbols"),
    Some("CombiningDiacriticalMarksforSymbols|CombiningMarksforSymbols"),
    Some("LetterlikeSymbols"),
    Some("NumberForms"),
    Some("Arrows"),
    Some("MathematicalOperators"),
    Some("MiscellaneousTechnical"),
    Some("ControlPictures"),
    Some("OpticalCharacterRecognition"),
    Some("EnclosedAlphanumerics"),
    Some("BoxDrawing"),
    Some("BlockElements"),
    Some("GeometricShapes"),
    Some("MiscellaneousSymbols"),
    Some("Dingbats"),
    Some("MiscellaneousMathematicalSymbols-A"),
    Some("SupplementalArrows-A"),
    Some("BraillePatterns"),
    Some("SupplementalArrows-B"),
    Some("MiscellaneousMathematicalSymbols-B"),
    Some("SupplementalMathematicalOperators"),
    Some("MiscellaneousSymbolsandArrows"),
    Some("Glagolitic"),
    Some("LatinExtended-C"),
    Some("Coptic"),
    Some("GeorgianSupplement"),
    Some("Tifinagh"),
    Some("EthiopicExtended"),
    Some("CyrillicExtended-A"),
    Some("SupplementalPunctuation"),
    Some("CJKRadicalsSupplement"),
    Some("KangxiRadicals"),
    None,
    Some("IdeographicDescriptionCharacters"),
    Some("CJKSymbolsandPunctuation"),
    Some("Hiragana"),
    Some("Katakana"),
    Some("Bopomofo"),
    Some("HangulCompatibilityJamo"),
    Some("Kanbun"),
    Some("BopomofoExtended"),
    Some("CJKStrokes"),
    Some("KatakanaPhoneticExtensions"),
    Some("EnclosedCJKLettersandMonths"),
    Some("CJKCompatibility"),
    Some("CJKUnifiedIdeographsExtensionA"),
    Some("YijingHexagramSymbols"),
    Some("CJKUnifiedIdeographs"),
    Some("YiSyllables"),
    Some("YiRadicals"),
    Some("Lisu"),
    Some("Vai"),
    Some("CyrillicExtended-B"),
    Some("Bamum"),
    Some("ModifierToneLetters"),
    Some("LatinExtended-D"),
    Some("SylotiNagri"),
    Some("CommonIndicNumberForms"),
    Some("Phags-pa"),
    Some("Saurashtra"),
    Some("DevanagariExtended"),
    Some("KayahLi"),
    Some("Rejang"),
    Some("HangulJamoExtended-A"),
    Some("Javanese"),
    Some("MyanmarExtended-B"),
    Some("Cham"),
    Some("MyanmarExtended-A"),
    Some("TaiViet"),
    Some("MeeteiMayekExtensions"),
    Some("EthiopicExtended-A"),
    Some("LatinExtended-E"),
    Some("CherokeeSupplement"),
    Some("MeeteiMayek"),
    Some("HangulSyllables"),
    Some("HangulJamoExtended-B"),
    Some("HighSurrogates"),
    Some("HighPrivateUseSurrogates"),
    Some("LowSurrogates"),
    Some("PrivateUseArea|PrivateUse"),
    Some("CJKCompatibilityIdeographs"),
    Some("AlphabeticPresentationForms"),
    Some("ArabicPresentationForms-A"),
    Some("VariationSelectors"),
    Some("VerticalForms"),
    Some("CombiningHalfMarks"),
    Some("CJKCompatibilityForms"),
    Some("SmallFormVariants"),
    Some("ArabicPresentationForms-B"),
    Some("HalfwidthandFullwidthForms"),
    Some("Specials"),
    Some("LinearBSyllabary"),
    Some("LinearBIdeograms"),
    Some("AegeanNumbers"),
    Some("AncientGreekNumbers"),
    Some("AncientSymbols"),
    Some("PhaistosDisc"),
    None,
    Some("Lycian"),
    Some("Carian"),
    Some("CopticEpactNumbers"),
    Some("OldItalic"),
    Some("Gothic"),
    Some("OldPermic"),
    Some("Ugaritic"),
    Some("OldPersian"),
    None,
    Some("Deseret"),
    Some("Shavian"),
    Some("Osmanya"),
    Some("Osage"),
    Some("Elbasan"),
    Some("CaucasianAlbanian"),
    Some("Vithkuqi"),
    None,
    Some("LinearA"),
    Some("LatinExtended-F"),
    None,
    Some("CypriotSyllabary"),
    Some("ImperialAramaic"),
    Some("Palmyrene"),
    Some("Nabataean"),
    None,
    Some("Hatran"),
    Some("Phoenician"),
    Some("Lydian"),
    None,
    Some("MeroiticHieroglyphs"),
    Some("MeroiticCursive"),
    Some("Kharoshthi"),
    Some("OldSouthArabian"),
    Some("OldNorthArabian"),
    None,
    Some("Manichaean"),
    Some("Avestan"),
    Some("InscriptionalParthian"),
    Some("InscriptionalPahlavi"),
    Some("PsalterPahlavi"),
    None,
    Some("OldTurkic"),
    None,
    Some("OldHungarian"),
    Some("HanifiRohingya"),
    None,
    Some("RumiNumeralSymbols"),
    Some("Yezidi"),
    None,
    Some("OldSogdian"),
    Some("Sogdian"),
    Some("OldUyghur"),
    Some("Chorasmian"),
    Some("Elymaic"),
    Some("Brahmi"),
    Some("Kaithi"),
    Some("SoraSompeng"),
    Some("Chakma"),
    Some("Mahajani"),
    Some("Sharada"),
    Some("SinhalaArchaicNumbers"),
    Some("Khojki"),
    None,
    Some("Multani"),
    Some("Khudawadi"),
    Some("Grantha"),
    None,
    Some("Newa"),
    Some("Tirhuta"),
    None,
    Some("Siddham"),
    Some("Modi"),
    Some("MongolianSupplement"),
    Some("Takri"),
    None,
    Some("Ahom"),
    None,
    Some("Dogra"),
    None,
    Some("WarangCiti"),
    Some("DivesAkuru"),
    None,
    Some("Nandinagari"),
    Some("ZanabazarSquare"),
    Some("Soyombo"),
    Some("UnifiedCanadianAboriginalSyllabicsExtended-A"),
    Some("PauCinHau"),
    None,
    Some("Bhaiksuki"),
    Some("Marchen"),
    None,
    Some("MasaramGondi"),
    Some("GunjalaGondi"),
    None,
    Some("Makasar"),
    None,
    Some("LisuSupplement"),
    Some("TamilSupplement"),
    Some("Cuneiform"),
    Some("CuneiformNumbersandPunctuation"),
    Some("EarlyDynasticCuneiform"),
    None,
    Some("Cypro-Minoan"),
    Some("EgyptianHieroglyphs"),
    Some("EgyptianHieroglyphFormatControls"),
    None,
    Some("AnatolianHieroglyphs"),
    None,
    Some("BamumSupplement"),
    Some("Mro"),
    Some("Tangsa"),
    Some("BassaVah"),
    Some("PahawhHmong"),
    None,
    Some("Medefaidrin"),
    None,
    Some("Miao"),
    None,
    Some("IdeographicSymbolsandPunctuation"),
    Some("Tangut"),
    Some("TangutComponents"),
    Some("KhitanSmallScript"),
    Some("TangutSupplement"),
    None,
    Some("KanaExtended-B"),
    Some("KanaSupplement"),
    Some("KanaExtended-A"),
    Some("SmallKanaExtension"),
    Some("Nushu"),
    None,
    Some("Duployan"),
    Some("ShorthandFormatControls"),
    None,
    Some("ZnamennyMusicalNotation"),
    None,
    Some("ByzantineMusicalSymbols"),
    Some("MusicalSymbols"),
    Some("AncientGreekMusicalNotation"),
    None,
    Some("MayanNumerals"),
    Some("TaiXuanJingSymbols"),
    Some("CountingRodNumerals"),
    None,
    Some("MathematicalAlphanumericSymbols"),
    Some("SuttonSignWriting"),
    None,
    Some("LatinExtended-G"),
    Some("GlagoliticSupplement"),
    None,
    Some("NyiakengPuachueHmong"),
    None,
    Some("Toto"),
    Some("Wancho"),
    None,
    Some("EthiopicExtended-B"),
    Some("MendeKikakui"),
    None,
    Some("Adlam"),
    None,
    Some("IndicSiyaqNumbers"),
    None,
    Some("OttomanSiyaqNumbers"),
    None,
    Some("ArabicMathematicalAlphabeticSymbols"),
    None,
    Some("MahjongTiles"),
    Some("DominoTiles"),
    Some("PlayingCards"),
    Some("EnclosedAlphanumericSupplement"),
    Some("EnclosedIdeographicSupplement"),
    Some("MiscellaneousSymbolsandPictographs"),
    Some("Emoticons"),
    Some("OrnamentalDingbats"),
    Some("TransportandMapSymbols"),
    Some("AlchemicalSymbols"),
    Some("GeometricShapesExtended"),
    Some("SupplementalArrows-C"),
    Some("SupplementalSymbolsandPictographs"),
    Some("ChessSymbols"),
    Some("SymbolsandPictographsExtended-A"),
    Some("SymbolsforLegacyComputing"),
    None,
    Some("CJKUnifiedIdeographsExtensionB"),
    None,
    Some("CJKUnifiedIdeographsExtensionC"),
    Some("CJKUnifiedIdeographsExtensionD"),
    Some("CJKUnifiedIdeographsExtensionE"),
    Some("CJKUnifiedIdeographsExtensionF"),
    None,
    Some("CJKCompatibilityIdeographsSupplement"),
    None,
    Some("CJKUnifiedIdeographsExtensionG"),
    None,
    Some("Tags"),
    None,
    Some("VariationSelectorsSupplement"),
    None,
    Some("SupplementaryPrivateUseArea-A|PrivateUse"),
    Some("SupplementaryPrivateUseArea-B|PrivateUse"),
];

pub(crate) static BLOCK_LENGTHS: &[u32] = &[
    128, 128, 128, 208, 96, 80, 112, 144,
    256, 48, 96, 112, 256, 80, 48, 64,
    64, 64, 32, 16, 48, 96, 128, 128,
    128, 128, 128, 128, 128, 128, 128, 128,
    128, 128, 256, 160, 96, 256, 384, 32,
    96, 640, 32, 96, 32, 32, 32, 32,
    128, 176, 80, 80, 48, 96, 32, 32,
    144, 80, 128, 64, 64, 80, 48, 16,
    48, 16, 48, 128, 64, 64, 256, 256,
    112, 48, 48, 48, 80, 64, 112, 256,
    256, 64, 32, 160, 128, 32, 96, 256,
    192, 48, 16, 256, 128, 128, 256, 256,
    96, 32, 128, 48, 80, 96, 32, 128,
    128, 224, 16, 16, 64, 96, 96, 48,
    96, 16, 32, 48, 16, 256, 256, 6592,
    64, 20992, 1168, 64, 48, 320, 96, 96,
    32, 224, 48, 16, 64, 96, 32, 48,
    48, 32, 96, 32, 96, 32, 96, 32,
    48, 64, 80, 64, 11184, 80, 896, 128,
    1024, 6400, 512, 80, 688, 16, 16, 16,
    32, 32, 144, 240, 16, 128, 128, 64,
    80, 64, 48, 128, 32, 64, 32, 48,
    32, 48, 32, 64, 32, 80, 48, 48,
    80, 48, 64, 80, 64, 384, 64, 64,
    64, 32, 32, 48, 48, 32, 32, 32,
    64, 32, 96, 96, 32, 32, 32, 64,
    64, 32, 32, 48, 80, 80, 48, 128,
    64, 288, 32, 64, 64, 48, 64, 64,
    48, 32, 128, 80, 48, 80, 48, 96,
    32, 80, 48, 48, 80, 128, 128, 128,
    96, 160, 128, 96, 32, 80, 48, 80,
    176, 80, 80, 96, 96, 64, 96, 80,
    96, 16, 64, 256, 112, 80, 64, 96,
    80, 304, 32, 176, 16, 64, 1024, 128,
    208, 2624, 112, 1072, 16, 4032, 640, 8576,
    576, 48, 96, 48, 144, 688, 96, 96,
    160, 64, 32, 6144, 768, 512, 128, 8816,
    16, 256, 48, 64, 400, 2304, 160, 16,
    4688, 208, 48, 256, 256, 80, 144, 32,
    96, 32, 128, 1024, 688, 1104, 256, 48,
    208, 80, 320, 48, 64, 1248, 32, 224,
    32, 96, 784, 80, 64, 80, 176, 256,
    256, 48, 112, 96, 256, 256, 768, 80,
    48, 128, 128, 128, 256, 256, 112, 144,
    256, 1024, 42720, 32, 4160, 224, 5776, 7488,
    3088, 544, 1504, 4944, 715952, 128, 128, 240,
    65040, 65536, 65536,
];
